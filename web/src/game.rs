use gloo::timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use tresito_core::{
    Cell, CellIndex, GameError, Leaderboard, Mark, MatchEngine, MatchState, MoveOutcome,
    MovePicker, RandomPicker,
};

use crate::leaderboard::LeaderboardView;
use crate::settings::{Settings, SettingsView};
use crate::store::ScoreStore;
use crate::theme::Theme;
use crate::utils::*;

/// Delay before the machine answers, so the human's move renders first.
const AI_MOVE_DELAY_MS: u32 = 500;

/// The table state that survives a page reload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct GameSession {
    pub engine: MatchEngine,
    pub ai_enabled: bool,
}

impl StorageKey for GameSession {
    const KEY: &'static str = "tresito:game:v1";
}

/// Whether the machine owes a move: it plays O, only while a game is on.
fn ai_turn_pending(session: &GameSession) -> bool {
    session.ai_enabled
        && !session.engine.is_finished()
        && session.engine.next_mark() == Mark::O
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct MoveApplied {
    /// The board changed and the view must re-render.
    updated: bool,
    /// The move ended a game with a winner and the leaderboard grew.
    recorded: bool,
}

/// Runs one move through the engine and, when it wins the game, folds the
/// result into the leaderboard. The engine finishing exactly once is what
/// keeps a game from ever being counted twice.
fn apply_move(
    session: &mut GameSession,
    leaderboard: &mut Leaderboard,
    cell: CellIndex,
) -> MoveApplied {
    match session.engine.play(cell) {
        Ok(MoveOutcome::Won) => {
            let recorded = match session.engine.winner() {
                Some(winner) => {
                    leaderboard.record_win(winner);
                    true
                }
                None => false,
            };
            MoveApplied {
                updated: true,
                recorded,
            }
        }
        Ok(outcome) => MoveApplied {
            updated: outcome.has_update(),
            recorded: false,
        },
        Err(err @ GameError::AlreadyEnded) => {
            log::trace!("move on cell {} rejected: {}", cell, err);
            MoveApplied {
                updated: false,
                recorded: false,
            }
        }
        Err(err) => {
            log::warn!("move on cell {} rejected: {}", cell, err);
            MoveApplied {
                updated: false,
                recorded: false,
            }
        }
    }
}

fn status_text(engine: &MatchEngine, settings: &Settings) -> String {
    match engine.state() {
        MatchState::Won => {
            let winner = engine.winner().map_or("?", |mark| settings.name_of(mark));
            format!("Winner: {winner}")
        }
        MatchState::Drawn => "Draw".to_string(),
        MatchState::InProgress => {
            format!("Next player: {}", settings.name_of(engine.next_mark()))
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellClicked(CellIndex),
    AiMoveDue,
    Restart,
    ToggleAi,
    ToggleTheme,
    ToggleLeaderboard,
    ToggleSettings,
    UpdateSettings(Settings),
    ResetScores,
    LeaderboardLoaded(Option<Leaderboard>),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    index: CellIndex,
    cell: Cell,
    #[prop_or_default]
    winning: bool,
    callback: Callback<CellIndex>,
}

#[function_component(CellView)]
fn cell_view(props: &CellProps) -> Html {
    let CellProps {
        index,
        cell,
        winning,
        callback,
    } = props.clone();

    let class = classes!(
        "square",
        match cell {
            Cell::Empty => classes!(),
            Cell::Marked(Mark::X) => classes!("mark-x"),
            Cell::Marked(Mark::O) => classes!("mark-o"),
        },
        winning.then_some("winning-square"),
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button {class} {onclick}>
            { cell.mark().map_or("", Mark::as_str) }
        </button>
    }
}

#[derive(Properties, Debug, Clone, PartialEq, Default)]
pub(crate) struct GameProps {
    /// Force a seed for the AI opponent instead of random
    #[prop_or_default]
    pub seed: Option<u64>,
    /// Override the leaderboard document endpoint
    #[prop_or_default]
    pub store: Option<String>,
}

pub(crate) struct GameView {
    session: GameSession,
    settings: Settings,
    leaderboard: Leaderboard,
    store: ScoreStore,
    picker: RandomPicker,
    theme: Theme,
    show_leaderboard: bool,
    settings_open: bool,
    pending_ai: Option<Timeout>,
}

impl GameView {
    fn arm_ai_timer(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.pending_ai = Some(Timeout::new(AI_MOVE_DELAY_MS, move || {
            link.send_message(Msg::AiMoveDue);
        }));
    }

    /// Dropping the handle cancels the scheduled callback.
    fn cancel_ai_timer(&mut self) {
        self.pending_ai = None;
    }

    fn play_cell(&mut self, cell: CellIndex) -> bool {
        let applied = apply_move(&mut self.session, &mut self.leaderboard, cell);
        if applied.recorded {
            self.push_leaderboard();
        }
        applied.updated
    }

    /// Wholesale overwrite of the stored document; failures are logged and
    /// the local state stays authoritative.
    fn push_leaderboard(&self) {
        let store = self.store.clone();
        let doc = self.leaderboard.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = store.write_full(&doc).await {
                log::error!("could not save leaderboard: {}", err);
            }
        });
    }

    fn fetch_leaderboard(store: &ScoreStore, ctx: &Context<Self>) {
        let store = store.clone();
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(async move {
            match store.read().await {
                Ok(doc) => link.send_message(Msg::LeaderboardLoaded(doc)),
                Err(err) => {
                    log::warn!("could not load leaderboard, starting empty: {}", err);
                    link.send_message(Msg::LeaderboardLoaded(None));
                }
            }
        });
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let store = ScoreStore::new(props.store.clone());
        Self::fetch_leaderboard(&store, ctx);

        let mut view = Self {
            session: LocalOrDefault::local_or_default(),
            settings: LocalOrDefault::local_or_default(),
            leaderboard: Leaderboard::default(),
            store,
            picker: RandomPicker::new(props.seed.unwrap_or_else(js_random_seed)),
            theme: LocalOrDefault::local_or_default(),
            show_leaderboard: false,
            settings_open: false,
            pending_ai: None,
        };

        // a reload can land in the middle of the machine's turn
        if ai_turn_pending(&view.session) {
            view.arm_ai_timer(ctx);
        }
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            CellClicked(cell) => {
                let updated = self.play_cell(cell);
                if updated {
                    // the turn changed hands, any scheduled move is stale
                    self.cancel_ai_timer();
                    if ai_turn_pending(&self.session) {
                        self.arm_ai_timer(ctx);
                    }
                }
                updated
            }
            AiMoveDue => {
                self.pending_ai = None;
                // the game may have been restarted or finished since this
                // was scheduled
                if !ai_turn_pending(&self.session) {
                    log::trace!("stale AI wake-up ignored");
                    false
                } else {
                    match self.picker.pick(self.session.engine.board()) {
                        Some(cell) => {
                            log::debug!("AI plays cell {}", cell);
                            self.play_cell(cell)
                        }
                        None => false,
                    }
                }
            }
            Restart => {
                self.cancel_ai_timer();
                self.session.engine = MatchEngine::new();
                true
            }
            ToggleAi => {
                self.session.ai_enabled = !self.session.ai_enabled;
                if ai_turn_pending(&self.session) {
                    self.arm_ai_timer(ctx);
                } else {
                    self.cancel_ai_timer();
                }
                true
            }
            ToggleTheme => {
                self.theme = self.theme.flipped();
                self.theme.apply();
                true
            }
            ToggleLeaderboard => {
                self.show_leaderboard = !self.show_leaderboard;
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                if !self.settings_open {
                    self.settings = LocalOrDefault::local_or_default();
                }
                true
            }
            UpdateSettings(settings) => {
                self.settings_open = false;
                if self.settings != settings {
                    self.settings = settings;
                    self.settings.local_save();
                }
                true
            }
            ResetScores => {
                self.leaderboard.reset();
                self.push_leaderboard();
                true
            }
            LeaderboardLoaded(doc) => match doc {
                Some(doc) => {
                    log::info!("leaderboard loaded, {} games on record", doc.score_history.len());
                    self.leaderboard = doc;
                    true
                }
                None => {
                    log::info!("no stored leaderboard, starting empty");
                    false
                }
            },
        };

        self.session.local_save();
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        if self.show_leaderboard {
            let on_back = ctx.link().callback(|_| ToggleLeaderboard);
            return html! {
                <LeaderboardView
                    leaderboard={self.leaderboard.clone()}
                    settings={self.settings.clone()}
                    {on_back}
                />
            };
        }

        let status = status_text(&self.session.engine, &self.settings);
        let winning_line = self.session.engine.winning_line();

        let cb_restart = ctx.link().callback(|_| Restart);
        let cb_theme = ctx.link().callback(|_| ToggleTheme);
        let cb_ai = ctx.link().callback(|_| ToggleAi);
        let cb_reset = ctx.link().callback(|_| ResetScores);
        let cb_leaderboard = ctx.link().callback(|_| ToggleLeaderboard);
        let cb_show_settings = ctx.link().callback(|_| ToggleSettings);

        html! {
            <div class="tresito">
                <small onclick={cb_show_settings}>{"···"}</small>
                <h1>{"Tic-Tac-Toe"}</h1>
                <div class="status">{status}</div>
                <div class="board">
                    {
                        for (0..3u8).map(|row| html! {
                            <div class="row">
                                {
                                    for (0..3u8).map(|col| {
                                        let index = row * 3 + col;
                                        let cell = self.session.engine.board()[index];
                                        let winning = winning_line
                                            .is_some_and(|line| line.contains(index));
                                        let callback = ctx.link().callback(Msg::CellClicked);
                                        html! {
                                            <CellView {index} {cell} {winning} {callback}/>
                                        }
                                    })
                                }
                            </div>
                        })
                    }
                </div>
                <button class="restart" onclick={cb_restart}>{"Restart Game"}</button>
                <button class="theme-toggle" onclick={cb_theme}>{"Toggle Dark Mode"}</button>
                <label class="ai-toggle">
                    <input
                        type="checkbox"
                        checked={self.session.ai_enabled}
                        onchange={cb_ai}
                    />
                    {"Enable AI Opponent"}
                </label>
                <button class="reset-scores" onclick={cb_reset}>{"Reset Scores"}</button>
                <button class="show-leaderboard" onclick={cb_leaderboard}>{"Show Leaderboard"}</button>
                <SettingsView
                    open={self.settings_open}
                    settings={self.settings.clone()}
                    on_apply={ctx.link().callback(UpdateSettings)}
                    on_cancel={ctx.link().callback(|_| ToggleSettings)}
                />
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tresito_core::{GameRecord, ScoreTotals};

    fn won_session() -> (GameSession, Leaderboard) {
        let mut session = GameSession::default();
        let mut leaderboard = Leaderboard::default();
        // X@0 O@1 X@3 O@2 X@6: X wins the left column
        for cell in [0, 1, 3, 2, 6] {
            apply_move(&mut session, &mut leaderboard, cell);
        }
        (session, leaderboard)
    }

    #[test]
    fn winning_move_records_exactly_one_game() {
        let (session, leaderboard) = won_session();

        assert_eq!(session.engine.winner(), Some(Mark::X));
        assert_eq!(leaderboard.scores, ScoreTotals { x: 1, o: 0 });
        assert_eq!(
            leaderboard.score_history,
            [GameRecord {
                game: 1,
                player_x: 1,
                player_o: 0,
                winner: Mark::X,
            }]
        );
    }

    #[test]
    fn further_moves_on_a_won_board_never_recount() {
        let (mut session, mut leaderboard) = won_session();

        let applied = apply_move(&mut session, &mut leaderboard, 8);

        assert_eq!(
            applied,
            MoveApplied {
                updated: false,
                recorded: false,
            }
        );
        assert_eq!(leaderboard.scores, ScoreTotals { x: 1, o: 0 });
        assert_eq!(leaderboard.score_history.len(), 1);
    }

    #[test]
    fn occupied_cell_changes_nothing() {
        let mut session = GameSession::default();
        let mut leaderboard = Leaderboard::default();
        apply_move(&mut session, &mut leaderboard, 4);

        let applied = apply_move(&mut session, &mut leaderboard, 4);

        assert!(!applied.updated);
        assert!(!applied.recorded);
    }

    #[test]
    fn draw_updates_the_board_but_not_the_leaderboard() {
        let mut session = GameSession::default();
        let mut leaderboard = Leaderboard::default();

        let mut last = MoveApplied {
            updated: false,
            recorded: false,
        };
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            last = apply_move(&mut session, &mut leaderboard, cell);
        }

        assert_eq!(session.engine.state(), MatchState::Drawn);
        assert!(last.updated);
        assert!(!last.recorded);
        assert!(leaderboard.score_history.is_empty());
    }

    #[test]
    fn ai_owes_a_move_only_on_o_turn_of_a_live_game() {
        let mut session = GameSession {
            ai_enabled: true,
            ..Default::default()
        };
        assert!(!ai_turn_pending(&session), "X is the human's turn");

        session.engine.play(4).unwrap();
        assert!(ai_turn_pending(&session));

        session.ai_enabled = false;
        assert!(!ai_turn_pending(&session));

        session.ai_enabled = true;
        let mut leaderboard = Leaderboard::default();
        // O@0 X@3 O@8 X@5: X completes the middle row
        for cell in [0, 3, 8, 5] {
            apply_move(&mut session, &mut leaderboard, cell);
        }
        assert!(session.engine.is_finished());
        assert!(!ai_turn_pending(&session), "finished game owes nothing");
    }

    #[test]
    fn status_follows_the_game_and_the_player_names() {
        let settings = Settings {
            player_x_name: "Ada".to_string(),
            player_o_name: "Grace".to_string(),
        };
        let mut engine = MatchEngine::new();

        assert_eq!(status_text(&engine, &settings), "Next player: Ada");

        engine.play(4).unwrap();
        assert_eq!(status_text(&engine, &settings), "Next player: Grace");

        for cell in [0, 8, 1, 6, 2] {
            engine.play(cell).unwrap();
        }
        assert_eq!(status_text(&engine, &settings), "Winner: Grace");
    }

    #[test]
    fn storage_key_is_versioned() {
        assert_eq!(<GameSession as StorageKey>::KEY, "tresito:game:v1");
    }
}
