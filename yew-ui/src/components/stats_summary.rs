use netdash_types::MetricSample;
use yew::prelude::*;

use crate::components::speed_chart::{format_value, Metric};

#[derive(Properties, PartialEq)]
pub struct StatsSummaryProps {
    /// Newest sample, if any measurement exists yet.
    #[prop_or_default]
    pub latest: Option<MetricSample>,
}

/// Latest-measurement cards shown above the chart.
#[function_component(StatsSummary)]
pub fn stats_summary(props: &StatsSummaryProps) -> Html {
    let card = |metric: Metric| {
        let value = match &props.latest {
            Some(sample) => {
                let raw = match metric {
                    Metric::Download => sample.download,
                    Metric::Upload => sample.upload,
                    Metric::Ping => sample.ping,
                    Metric::PacketLoss => sample.packet_loss,
                };
                format_value(metric, raw)
            }
            None => "--".to_string(),
        };
        html! {
            <div class="stat-card">
                <div class="stat-value">{ value }</div>
                <div class="stat-label">{ metric.label() }</div>
            </div>
        }
    };

    html! {
        <div class="stats-summary">
            { for Metric::ALL.iter().map(|m| card(*m)) }
        </div>
    }
}
