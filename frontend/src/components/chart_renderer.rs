use shared::models::chart::LABEL_AREA;
use shared::BarChart;
use yew::prelude::*;

const BAR_COLOR: &str = "#3B82F6";

/// Chart renderer component for single-series bar charts
#[derive(Properties, PartialEq)]
pub struct ChartRendererProps {
    pub chart: BarChart,
    #[prop_or_default]
    pub width: Option<u32>,
    #[prop_or_default]
    pub height: Option<u32>,
}

#[function_component(ChartRenderer)]
pub fn chart_renderer(props: &ChartRendererProps) -> Html {
    let width = props.width.unwrap_or(800);
    let height = props.height.unwrap_or(400);
    let chart = &props.chart;

    if chart.points.is_empty() {
        return html! {
            <div class="chart-container text-sm text-gray-500 p-4">{"No contests to chart."}</div>
        };
    }

    let bars = chart.layout(width, height);
    let baseline = height as f64 - LABEL_AREA;

    html! {
        <div class="chart-container overflow-auto" style={format!("height: {}px;", height + 40)}>
            <h3 class="chart-title text-lg font-semibold text-gray-900 mb-2">{&chart.title}</h3>
            <svg
                width={width.to_string()}
                height={height.to_string()}
                viewBox={format!("0 0 {} {}", width, height)}
            >
                <g class="chart-area">
                    {for bars.iter().zip(chart.points.iter()).map(|(bar, point)| {
                        let center = bar.x + bar.width / 2.0;
                        html! {
                            <g class="bar-group">
                                <title>{format!("{}: {:.2} hours", point.label, point.value)}</title>
                                <rect
                                    x={bar.x.to_string()}
                                    y={bar.y.to_string()}
                                    width={bar.width.to_string()}
                                    height={bar.height.to_string()}
                                    fill={BAR_COLOR}
                                    class="bar"
                                />
                                <text
                                    x={center.to_string()}
                                    y={(bar.y - 5.0).to_string()}
                                    text-anchor="middle"
                                    class="bar-value text-xs"
                                >
                                    {format!("{:.1}", point.value)}
                                </text>
                                <text
                                    x={center.to_string()}
                                    y={(baseline + 15.0).to_string()}
                                    text-anchor="end"
                                    transform={format!("rotate(-45, {}, {})", center, baseline + 15.0)}
                                    class="bar-label text-xs"
                                >
                                    {truncate_label(&point.label, 24)}
                                </text>
                            </g>
                        }
                    })}
                </g>
                <g class="chart-axes">
                    <line
                        x1="0"
                        y1={baseline.to_string()}
                        x2={width.to_string()}
                        y2={baseline.to_string()}
                        stroke="#e5e7eb"
                        stroke-width="1"
                    />
                    <text
                        x="12"
                        y={(baseline / 2.0).to_string()}
                        text-anchor="middle"
                        transform={format!("rotate(-90, 12, {})", baseline / 2.0)}
                        class="y-axis-label text-xs"
                    >
                        {&chart.y_axis}
                    </text>
                    <text
                        x={(width / 2).to_string()}
                        y={height.saturating_sub(5).to_string()}
                        text-anchor="middle"
                        class="x-axis-label text-xs"
                    >
                        {&chart.x_axis}
                    </text>
                </g>
            </svg>
        </div>
    }
}

/// Shortens long contest names so rotated labels stay inside the chart
fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let mut short: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        short.push('…');
        short
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_label;

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Div 2", 24), "Div 2");
        assert_eq!(truncate_label("Codeforces Round", 8), "Codefor…");
    }
}
