//! Grouped vertical bar chart drawn as plain SVG.

use leptos::prelude::*;

const CHART_HEIGHT: f64 = 200.0;
const BAR_WIDTH: f64 = 18.0;
const BAR_GAP: f64 = 4.0;
const GROUP_GAP: f64 = 24.0;

/// One series of the chart; `class` picks the bar colour from the stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub class: &'static str,
}

/// Values of every series for one category on the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub values: Vec<f64>,
}

impl BarGroup {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self { label: label.into(), values }
    }
}

/// Scales values so that the largest one fills `max_height`. Negative values
/// are drawn as empty bars.
pub fn scale_heights(groups: &[BarGroup], max_height: f64) -> Vec<Vec<f64>> {
    let max = groups
        .iter()
        .flat_map(|g| g.values.iter().copied())
        .fold(0.0_f64, f64::max);
    groups
        .iter()
        .map(|g| {
            g.values
                .iter()
                .map(|v| if max > 0.0 { v.max(0.0) / max * max_height } else { 0.0 })
                .collect()
        })
        .collect()
}

#[component]
pub fn BarChart(
    series: Vec<ChartSeries>,
    groups: Vec<BarGroup>,
    /// Formats a value for the bar tooltip.
    #[prop(optional)]
    format: Option<fn(f64) -> String>,
) -> impl IntoView {
    let heights = scale_heights(&groups, CHART_HEIGHT);
    let per_group = series.len().max(1) as f64;
    let group_width = per_group * (BAR_WIDTH + BAR_GAP) - BAR_GAP;
    let width = groups.len() as f64 * (group_width + GROUP_GAP) + GROUP_GAP;
    let label_y = CHART_HEIGHT + 16.0;
    let fmt = format.unwrap_or(|v| format!("{}", v));

    let bars = groups
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(gi, (group, group_heights))| {
            let x0 = GROUP_GAP + gi as f64 * (group_width + GROUP_GAP);
            let rects = group_heights
                .into_iter()
                .zip(group.values.iter())
                .zip(series.iter())
                .enumerate()
                .map(|(si, ((h, value), s))| {
                    let x = x0 + si as f64 * (BAR_WIDTH + BAR_GAP);
                    let title = format!("{}: {}", s.name, fmt(*value));
                    view! {
                        <rect
                            class={format!("bar-chart__bar {}", s.class)}
                            x=x
                            y={CHART_HEIGHT - h}
                            width=BAR_WIDTH
                            height=h
                        >
                            <title>{title}</title>
                        </rect>
                    }
                })
                .collect_view();
            view! {
                <g>
                    {rects}
                    <text class="bar-chart__label" x={x0 + group_width / 2.0} y=label_y text-anchor="middle">
                        {group.label.clone()}
                    </text>
                </g>
            }
        })
        .collect_view();

    let legend = series
        .iter()
        .map(|s| {
            view! {
                <span class="bar-chart__legend-item">
                    <span class={format!("bar-chart__swatch {}", s.class)}></span>
                    {s.name}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="bar-chart">
            <svg
                class="bar-chart__svg"
                viewBox={format!("0 0 {} {}", width, label_y + 8.0)}
                preserveAspectRatio="xMidYMid meet"
            >
                <line class="bar-chart__axis" x1="0" y1=CHART_HEIGHT x2=width y2=CHART_HEIGHT />
                {bars}
            </svg>
            <div class="bar-chart__legend">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_heights_relative_to_max() {
        let groups = vec![
            BarGroup::new("Jan", vec![50.0, 100.0]),
            BarGroup::new("Fev", vec![25.0, 0.0]),
        ];
        assert_eq!(scale_heights(&groups, 200.0), vec![vec![100.0, 200.0], vec![50.0, 0.0]]);
    }

    #[test]
    fn test_scale_heights_all_zero_or_negative() {
        let groups = vec![BarGroup::new("A", vec![0.0, -5.0])];
        assert_eq!(scale_heights(&groups, 200.0), vec![vec![0.0, 0.0]]);
        assert!(scale_heights(&[], 200.0).is_empty());
    }
}
