use serde::{Deserialize, Serialize};
use tresito_core::Mark;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::StorageKey;

/// Player-facing options. Persisted locally; the leaderboard document keeps
/// marks only, names are a display concern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub player_x_name: String,
    pub player_o_name: String,
}

impl Settings {
    pub(crate) fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.player_x_name,
            Mark::O => &self.player_o_name,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_x_name: "Player X".to_string(),
            player_o_name: "Player O".to_string(),
        }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "tresito:settings:v1";
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub settings: Settings,
    pub on_apply: Callback<Settings>,
    pub on_cancel: Callback<()>,
}

#[function_component(SettingsView)]
pub(crate) fn settings_view(props: &SettingsProps) -> Html {
    let x_input = use_node_ref();
    let o_input = use_node_ref();

    let on_apply = {
        let x_input = x_input.clone();
        let o_input = o_input.clone();
        let current = props.settings.clone();
        let callback = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| {
            let read = |node: &NodeRef, fallback: &str| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .filter(|value| !value.trim().is_empty())
                    .unwrap_or_else(|| fallback.to_string())
            };
            callback.emit(Settings {
                player_x_name: read(&x_input, &current.player_x_name),
                player_o_name: read(&o_input, &current.player_o_name),
            });
        })
    };

    let on_cancel = {
        let callback = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <label>
                    {"Player X name"}
                    <input ref={x_input} type="text" value={props.settings.player_x_name.clone()}/>
                </label>
                <label>
                    {"Player O name"}
                    <input ref={o_input} type="text" value={props.settings.player_o_name.clone()}/>
                </label>
                <footer>
                    <button type="reset" onclick={on_cancel}>{"Cancel"}</button>
                    <button onclick={on_apply}>{"Apply"}</button>
                </footer>
            </article>
        </dialog>
    }
}
