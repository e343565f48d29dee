use std::fmt;
use std::str::FromStr;

use bi_core::{Error, Result, TopicAnalysis, TopicInsight};

/// The six fixed analysis dimensions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Consumer,
    Cost,
    Convenience,
    Communication,
    Competitive,
    Media,
}

/// One headline row of the insight table. The `{brand}` placeholder in an
/// insight template is replaced with the brand name at render time.
struct TopicRow {
    headline: &'static str,
    insights: [&'static str; 3],
}

const CONSUMER_ROWS: [TopicRow; 3] = [
    TopicRow {
        headline: "Target Demographics",
        insights: [
            "{brand}'s primary consumer base demographic analysis",
            "Age and income distribution across the active customer segments",
            "Geographic concentration of the most engaged buyers",
        ],
    },
    TopicRow {
        headline: "Purchase Behavior",
        insights: [
            "Repeat-purchase patterns observed for {brand} customers",
            "Seasonal demand swings and their effect on basket size",
            "Channel preferences between online and in-store buying",
        ],
    },
    TopicRow {
        headline: "Brand Loyalty",
        insights: [
            "Retention drivers keeping customers with {brand}",
            "Net promoter sentiment across recent survey waves",
            "Switching triggers reported by churned customers",
        ],
    },
];

const COST_ROWS: [TopicRow; 3] = [
    TopicRow {
        headline: "Pricing Position",
        insights: [
            "{brand}'s price positioning relative to the category average",
            "Premium and discount tiers across the product range",
            "Price elasticity signals from recent promotions",
        ],
    },
    TopicRow {
        headline: "Cost Perception",
        insights: [
            "How customers rate {brand} on value for money",
            "Perceived hidden costs raised in customer feedback",
            "Willingness-to-pay benchmarks for the flagship line",
        ],
    },
    TopicRow {
        headline: "Promotional Strategy",
        insights: [
            "Discount cadence and depth used by {brand} this quarter",
            "Bundle and loyalty offers currently in market",
            "Promotional overlap with key competitor campaigns",
        ],
    },
];

const CONVENIENCE_ROWS: [TopicRow; 3] = [
    TopicRow {
        headline: "Purchase Accessibility",
        insights: [
            "Availability of {brand} across retail and online channels",
            "Checkout friction points reported by shoppers",
            "Stock coverage in the highest-demand regions",
        ],
    },
    TopicRow {
        headline: "Digital Experience",
        insights: [
            "Usability of {brand}'s web and mobile purchase paths",
            "Search-to-purchase conversion along the digital funnel",
            "Support channel responsiveness and self-service coverage",
        ],
    },
    TopicRow {
        headline: "Delivery & Fulfillment",
        insights: [
            "Delivery speed and reliability for {brand} orders",
            "Return and exchange policy friction compared to peers",
            "Click-and-collect adoption where offered",
        ],
    },
];

const COMMUNICATION_ROWS: [TopicRow; 3] = [
    TopicRow {
        headline: "Message Clarity",
        insights: [
            "Consistency of {brand}'s core message across channels",
            "Tagline recall measured against category leaders",
            "Clarity of the value proposition in recent campaigns",
        ],
    },
    TopicRow {
        headline: "Channel Mix",
        insights: [
            "Share of voice {brand} holds in paid and organic channels",
            "Social platform engagement rates by format",
            "Email and push communication frequency and opt-out rates",
        ],
    },
    TopicRow {
        headline: "Audience Engagement",
        insights: [
            "Sentiment of conversations mentioning {brand}",
            "Community response time to customer posts",
            "Influencer and partner amplification reach",
        ],
    },
];

const COMPETITIVE_ROWS: [TopicRow; 3] = [
    TopicRow {
        headline: "Market Position",
        insights: [
            "{brand}'s market share analysis",
            "Category growth rate versus the brand's own trajectory",
            "Positioning map placement against the top three rivals",
        ],
    },
    TopicRow {
        headline: "Competitor Moves",
        insights: [
            "Recent launches and pivots by {brand}'s closest competitors",
            "Pricing actions taken by rivals in the last quarter",
            "Distribution expansion announced by challenger brands",
        ],
    },
    TopicRow {
        headline: "Differentiation",
        insights: [
            "Attributes where {brand} is most clearly differentiated",
            "Feature parity gaps flagged in comparative reviews",
            "Defensible advantages by channel and segment",
        ],
    },
];

const MEDIA_ROWS: [TopicRow; 3] = [
    TopicRow {
        headline: "Press Coverage",
        insights: [
            "Volume and tone of recent press mentions of {brand}",
            "Outlets driving the largest share of coverage",
            "Coverage spikes tied to product or corporate news",
        ],
    },
    TopicRow {
        headline: "Social Presence",
        insights: [
            "Follower growth and engagement trend for {brand}",
            "Organic versus paid reach across platforms",
            "User-generated content volume and sentiment",
        ],
    },
    TopicRow {
        headline: "Reputation Signals",
        insights: [
            "Review-site ratings trajectory for {brand}",
            "Crisis or controversy exposure in the monitoring window",
            "Analyst and industry-award recognition received",
        ],
    },
];

impl Topic {
    pub const ALL: [Topic; 6] = [
        Topic::Consumer,
        Topic::Cost,
        Topic::Convenience,
        Topic::Communication,
        Topic::Competitive,
        Topic::Media,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Topic::Consumer => "consumer",
            Topic::Cost => "cost",
            Topic::Convenience => "convenience",
            Topic::Communication => "communication",
            Topic::Competitive => "competitive",
            Topic::Media => "media",
        }
    }

    fn rows(&self) -> &'static [TopicRow; 3] {
        match self {
            Topic::Consumer => &CONSUMER_ROWS,
            Topic::Cost => &COST_ROWS,
            Topic::Convenience => &CONVENIENCE_ROWS,
            Topic::Communication => &COMMUNICATION_ROWS,
            Topic::Competitive => &COMPETITIVE_ROWS,
            Topic::Media => &MEDIA_ROWS,
        }
    }

    /// Render this topic's insight table for a brand. Pure and total: the
    /// brand string is embedded verbatim, validation belongs to the caller.
    pub fn analyze(&self, brand: &str) -> TopicAnalysis {
        TopicAnalysis {
            topics: self
                .rows()
                .iter()
                .map(|row| TopicInsight {
                    headline: row.headline.to_string(),
                    insights: row
                        .insights
                        .iter()
                        .map(|template| template.replace("{brand}", brand))
                        .collect(),
                })
                .collect(),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Topic::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| Error::Config(format!("Unknown topic: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_has_three_by_three_shape() {
        for topic in Topic::ALL {
            let analysis = topic.analyze("Acme");
            assert_eq!(analysis.topics.len(), 3, "topic {}", topic);
            for insight in &analysis.topics {
                assert!(!insight.headline.is_empty());
                assert_eq!(insight.insights.len(), 3);
            }
        }
    }

    #[test]
    fn test_brand_appears_in_every_headline_group() {
        for topic in Topic::ALL {
            let analysis = topic.analyze("Globex");
            for insight in &analysis.topics {
                assert!(
                    insight.insights.iter().any(|s| s.contains("Globex")),
                    "no brand mention under {} / {}",
                    topic,
                    insight.headline
                );
            }
        }
    }

    #[test]
    fn test_generators_are_deterministic() {
        for topic in Topic::ALL {
            assert_eq!(topic.analyze("Acme"), topic.analyze("Acme"));
        }
    }

    #[test]
    fn test_consumer_demographics_literal() {
        let analysis = Topic::Consumer.analyze("Acme");
        let demographics = analysis
            .topics
            .iter()
            .find(|t| t.headline == "Target Demographics")
            .expect("Target Demographics headline");
        assert!(demographics
            .insights
            .iter()
            .any(|s| s == "Acme's primary consumer base demographic analysis"));
    }

    #[test]
    fn test_empty_brand_is_embedded_verbatim() {
        let analysis = Topic::Competitive.analyze("");
        assert!(analysis
            .topics
            .iter()
            .flat_map(|t| t.insights.iter())
            .any(|s| s == "'s market share analysis"));
    }

    #[test]
    fn test_topic_from_str_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(topic.name().parse::<Topic>().unwrap(), topic);
        }
        assert!("weather".parse::<Topic>().is_err());
    }
}
