use tresito_core::{DEFAULT_PAGE_SIZE, Leaderboard, Mark, page};
use yew::prelude::*;

use crate::chart::ScoreChart;
use crate::settings::Settings;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    NextPage,
    PrevPage,
}

/// Clamped page step: `None` when already at the edge.
fn step_page(current: usize, total_pages: usize, msg: Msg) -> Option<usize> {
    match msg {
        Msg::NextPage if current < total_pages => Some(current + 1),
        Msg::PrevPage if current > 1 => Some(current - 1),
        _ => None,
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct LeaderboardProps {
    pub leaderboard: Leaderboard,
    pub settings: Settings,
    pub on_back: Callback<()>,
}

/// Score totals, paginated game history, and the trend chart.
///
/// The page number lives here: it starts at 1 every time the view is
/// entered and stays put while records are appended behind it.
pub(crate) struct LeaderboardView {
    current_page: usize,
}

impl Component for LeaderboardView {
    type Message = Msg;
    type Properties = LeaderboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { current_page: 1 }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let history = &ctx.props().leaderboard.score_history;
        let total_pages = page(history, self.current_page, DEFAULT_PAGE_SIZE).total_pages;

        match step_page(self.current_page, total_pages, msg) {
            Some(next) => {
                self.current_page = next;
                true
            }
            // already at the edge
            None => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let current = page(
            &props.leaderboard.score_history,
            self.current_page,
            DEFAULT_PAGE_SIZE,
        );

        let cb_prev = ctx.link().callback(|_| Msg::PrevPage);
        let cb_next = ctx.link().callback(|_| Msg::NextPage);
        let cb_back = {
            let on_back = props.on_back.clone();
            Callback::from(move |_: MouseEvent| on_back.emit(()))
        };

        html! {
            <div class="leaderboard">
                <h1>{"Leaderboard"}</h1>

                <section class="overall-scores">
                    <h2>{"Overall Scores"}</h2>
                    <div class="score-cards">
                        <div class="score-card">
                            <h3>{&props.settings.player_x_name}</h3>
                            <p class="score">{props.leaderboard.scores.wins_of(Mark::X)}</p>
                        </div>
                        <div class="score-card">
                            <h3>{&props.settings.player_o_name}</h3>
                            <p class="score">{props.leaderboard.scores.wins_of(Mark::O)}</p>
                        </div>
                    </div>
                </section>

                <section class="game-history">
                    <h2>{"Game History"}</h2>
                    <table>
                        <thead>
                            <tr>
                                <th>{"Game"}</th>
                                <th>{&props.settings.player_x_name}</th>
                                <th>{&props.settings.player_o_name}</th>
                                <th>{"Winner"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                for current.entries.iter().map(|record| html! {
                                    <tr key={record.game}>
                                        <td>{format!("Game {}", record.game)}</td>
                                        <td>{record.player_x}</td>
                                        <td>{record.player_o}</td>
                                        <td>{props.settings.name_of(record.winner)}</td>
                                    </tr>
                                })
                            }
                        </tbody>
                    </table>
                    <nav class="pagination">
                        <button onclick={cb_prev} disabled={current.page_number == 1}>
                            {"‹"}
                        </button>
                        <span>{format!("Page {} of {}", current.page_number, current.total_pages)}</span>
                        <button onclick={cb_next} disabled={current.page_number == current.total_pages}>
                            {"›"}
                        </button>
                    </nav>
                </section>

                <section class="score-progression">
                    <h2>{"Score Progression"}</h2>
                    <ScoreChart
                        history={props.leaderboard.score_history.clone()}
                        player_x_name={props.settings.player_x_name.clone()}
                        player_o_name={props.settings.player_o_name.clone()}
                    />
                </section>

                <button class="back" onclick={cb_back}>{"Back to Game"}</button>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_stops_at_the_last_page() {
        assert_eq!(step_page(1, 3, Msg::NextPage), Some(2));
        assert_eq!(step_page(3, 3, Msg::NextPage), None);
    }

    #[test]
    fn prev_stops_at_the_first_page() {
        assert_eq!(step_page(2, 3, Msg::PrevPage), Some(1));
        assert_eq!(step_page(1, 3, Msg::PrevPage), None);
    }

    #[test]
    fn single_page_history_never_moves() {
        assert_eq!(step_page(1, 1, Msg::NextPage), None);
        assert_eq!(step_page(1, 1, Msg::PrevPage), None);
    }
}
