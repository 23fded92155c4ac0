use tresito_core::{GameRecord, WinCount};
use yew::prelude::*;

const WIDTH: f64 = 380.0;
const HEIGHT: f64 = 200.0;
const PADDING: f64 = 28.0;

/// Highest cumulative total on record, floored at 1 so an early chart still
/// has a usable y scale.
fn max_total(history: &[GameRecord]) -> WinCount {
    history
        .iter()
        .map(|record| record.player_x.max(record.player_o))
        .max()
        .unwrap_or(0)
        .max(1)
}

/// SVG `points` string for one series: x spreads over the game sequence,
/// y scales to the highest total in either series.
fn polyline_points(history: &[GameRecord], pick: fn(&GameRecord) -> WinCount) -> String {
    let top = max_total(history) as f64;
    let span_x = WIDTH - 2.0 * PADDING;
    let span_y = HEIGHT - 2.0 * PADDING;
    let step = span_x / history.len().saturating_sub(1).max(1) as f64;

    history
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let x = PADDING + step * index as f64;
            let y = HEIGHT - PADDING - span_y * pick(record) as f64 / top;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ChartProps {
    pub history: Vec<GameRecord>,
    pub player_x_name: AttrValue,
    pub player_o_name: AttrValue,
}

/// Two-series line chart of cumulative wins, indexed by game number.
#[function_component(ScoreChart)]
pub(crate) fn score_chart(props: &ChartProps) -> Html {
    if props.history.is_empty() {
        return html! {
            <p class="chart-empty">{"No games on record yet"}</p>
        };
    }

    let x_points = polyline_points(&props.history, |record| record.player_x);
    let o_points = polyline_points(&props.history, |record| record.player_o);
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let baseline = HEIGHT - PADDING;

    html! {
        <figure class="score-chart">
            <svg viewBox={view_box} role="img">
                <line
                    class="axis"
                    x1={PADDING.to_string()} y1={baseline.to_string()}
                    x2={(WIDTH - PADDING).to_string()} y2={baseline.to_string()}
                />
                <polyline class="series series-x" fill="none" points={x_points}/>
                <polyline class="series series-o" fill="none" points={o_points}/>
            </svg>
            <figcaption>
                <span class="legend legend-x">{props.player_x_name.clone()}</span>
                <span class="legend legend-o">{props.player_o_name.clone()}</span>
            </figcaption>
        </figure>
    }
}
