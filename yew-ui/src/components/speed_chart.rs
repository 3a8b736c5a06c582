use chrono::Local;
use netdash_types::MetricSample;
use yew::prelude::*;

/// The four measurement series drawn by the chart.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Metric {
    Download,
    Upload,
    Ping,
    PacketLoss,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Download,
        Metric::Upload,
        Metric::Ping,
        Metric::PacketLoss,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Download => "Download",
            Metric::Upload => "Upload",
            Metric::Ping => "Ping",
            Metric::PacketLoss => "Packet Loss",
        }
    }

    fn stroke_color(&self) -> &'static str {
        match self {
            Metric::Download => "#10b981",
            Metric::Upload => "#3b82f6",
            Metric::Ping => "#fbbf24",
            Metric::PacketLoss => "#ef4444",
        }
    }

    fn dash(&self) -> Option<&'static str> {
        match self {
            Metric::Download | Metric::Upload => None,
            Metric::Ping => Some("5,5"),
            Metric::PacketLoss => Some("3,3"),
        }
    }
}

/// Render a measurement value for display.
///
/// Two decimal places, except a packet loss of exactly zero which renders as
/// a bare "0". Ping carries "ms", packet loss "%", speeds "Mbps".
pub fn format_value(metric: Metric, value: f64) -> String {
    let number = if metric == Metric::PacketLoss && value == 0.0 {
        "0".to_string()
    } else {
        format!("{value:.2}")
    };
    match metric {
        Metric::Download | Metric::Upload => format!("{number} Mbps"),
        Metric::Ping => format!("{number} ms"),
        Metric::PacketLoss => format!("{number}%"),
    }
}

/// Chart data derived from the sample history: four parallel numeric
/// sequences plus one `HH:MM` label per sample. Fully replaced on each
/// refresh, never updated incrementally.
#[derive(Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub download: Vec<f64>,
    pub upload: Vec<f64>,
    pub ping: Vec<f64>,
    pub packet_loss: Vec<f64>,
}

impl ChartSeries {
    pub fn from_samples(samples: &[MetricSample]) -> Self {
        Self {
            labels: samples
                .iter()
                .map(|s| s.created_at.with_timezone(&Local).format("%H:%M").to_string())
                .collect(),
            download: samples.iter().map(|s| s.download).collect(),
            upload: samples.iter().map(|s| s.upload).collect(),
            ping: samples.iter().map(|s| s.ping).collect(),
            packet_loss: samples.iter().map(|s| s.packet_loss).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn points_for(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Download => &self.download,
            Metric::Upload => &self.upload,
            Metric::Ping => &self.ping,
            Metric::PacketLoss => &self.packet_loss,
        }
    }

    /// Shared y-axis ceiling across all four series, clamped to at least 1
    /// so an all-zero history still renders a usable scale.
    fn max_value(&self) -> f64 {
        Metric::ALL
            .iter()
            .flat_map(|m| self.points_for(*m).iter().copied())
            .fold(1.0f64, f64::max)
    }
}

#[derive(Properties, PartialEq)]
pub struct SpeedChartProps {
    pub series: ChartSeries,
    #[prop_or(900)]
    pub width: u32,
    #[prop_or(320)]
    pub height: u32,
}

#[function_component(SpeedChart)]
pub fn speed_chart(props: &SpeedChartProps) -> Html {
    let SpeedChartProps {
        series,
        width,
        height,
    } = props;

    if series.is_empty() {
        return html! {
            <div class="speed-chart">
                <div class="chart-title">{ "Speed history" }</div>
                <div class="no-data">{ "No data available" }</div>
            </div>
        };
    }

    let chart_width = *width as f64;
    let chart_height = *height as f64;
    let margin_left = 60.0;
    let margin_bottom = 40.0;
    let margin_top = 30.0;
    let margin_right = 20.0;
    let plot_width = chart_width - margin_left - margin_right;
    let plot_height = chart_height - margin_bottom - margin_top;

    let data_len = series.len();
    let max_value = series.max_value();

    // One polyline per metric, all on a shared zero-based y scale.
    let series_elements: Vec<Html> = Metric::ALL
        .iter()
        .map(|metric| {
            let points: String = series
                .points_for(*metric)
                .iter()
                .enumerate()
                .map(|(i, &value)| {
                    let x =
                        margin_left + (i as f64 / (data_len - 1).max(1) as f64 * plot_width);
                    let y = margin_top + plot_height
                        - (value.max(0.0) / max_value * plot_height);

                    if y.is_finite() {
                        format!("{x:.1},{y:.1}")
                    } else {
                        let floor = margin_top + plot_height;
                        format!("{x:.1},{floor:.1}")
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");

            html! {
                <polyline
                    points={points}
                    fill="none"
                    stroke={metric.stroke_color()}
                    stroke-width="2"
                    stroke-dasharray={metric.dash()}
                />
            }
        })
        .collect();

    // Legend doubles as the latest-value readout.
    let legend_elements: Vec<Html> = Metric::ALL
        .iter()
        .enumerate()
        .map(|(i, metric)| {
            let y_pos = 15 + (i * 15) as i32;
            let latest = series
                .points_for(*metric)
                .last()
                .map(|v| format!("{}: {}", metric.label(), format_value(*metric, *v)))
                .unwrap_or_else(|| metric.label().to_string());
            html! {
                <text x="5" y={y_pos.to_string()} fill={metric.stroke_color()} font-size="10">{ latest }</text>
            }
        })
        .collect();

    let first_label = series.labels.first().cloned().unwrap_or_default();
    let mid_label = series.labels.get(data_len / 2).cloned().unwrap_or_default();
    let last_label = series.labels.last().cloned().unwrap_or_default();

    html! {
        <div class="speed-chart">
            <div class="chart-title">{ "Speed history" }</div>
            <svg width={width.to_string()} height={height.to_string()} viewBox={format!("0 0 {width} {height}")}>
                // Y-axis
                <line x1={margin_left.to_string()} y1={margin_top.to_string()} x2={margin_left.to_string()} y2={(plot_height + margin_top).to_string()} stroke="#1e293b" stroke-width="1" />
                // X-axis
                <line x1={margin_left.to_string()} y1={(plot_height + margin_top).to_string()} x2={(chart_width - margin_right).to_string()} y2={(plot_height + margin_top).to_string()} stroke="#1e293b" stroke-width="1" />

                // Data series
                { for series_elements }

                // Legend / latest readout
                { for legend_elements }

                // Y-axis labels
                <text x={(margin_left - 10.0).to_string()} y={(plot_height + margin_top + 4.0).to_string()} fill="#64748b" font-size="11" text-anchor="end">{ "0" }</text>
                <text x={(margin_left - 10.0).to_string()} y={(margin_top + plot_height / 2.0 + 4.0).to_string()} fill="#64748b" font-size="11" text-anchor="end">{ format!("{:.1}", max_value / 2.0) }</text>
                <text x={(margin_left - 10.0).to_string()} y={(margin_top + 4.0).to_string()} fill="#64748b" font-size="11" text-anchor="end">{ format!("{:.1}", max_value) }</text>

                // X-axis time labels, oldest on the left
                <text x={margin_left.to_string()} y={(chart_height - 10.0).to_string()} fill="#64748b" font-size="11" text-anchor="middle">{ first_label }</text>
                <text x={(margin_left + plot_width / 2.0).to_string()} y={(chart_height - 10.0).to_string()} fill="#64748b" font-size="11" text-anchor="middle">{ mid_label }</text>
                <text x={(margin_left + plot_width).to_string()} y={(chart_height - 10.0).to_string()} fill="#64748b" font-size="11" text-anchor="middle">{ last_label }</text>
            </svg>
        </div>
    }
}
