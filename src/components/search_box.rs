use dioxus::{logger::tracing, prelude::*};

/// Which affordance is rendered after the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingControl {
    /// Empty input, nothing to commit or discard.
    None,
    /// Non-empty text that has not been committed yet.
    Submit,
    /// Non-empty text that is currently applied.
    Clear,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// A keystroke changed the input text (any string, including empty).
    Edit(String),
    /// The user committed the current text.
    Submit,
    /// The user discarded an applied query.
    Clear,
}

/// Notification the caller must deliver after the state change is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEffect {
    Submitted(String),
    Cleared,
}

/// Local state of a [`SearchBox`].
///
/// `submitted` is true exactly while `value` equals the last committed,
/// uncleared text. Editing to a non-empty value resets it; erasing the last
/// character counts as committing the empty query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    value: String,
    submitted: bool,
}

impl SearchState {
    pub fn seeded(default_value: &str) -> Self {
        Self {
            value: default_value.to_string(),
            submitted: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn trailing_control(&self) -> TrailingControl {
        if self.value.is_empty() {
            TrailingControl::None
        } else if self.submitted {
            TrailingControl::Clear
        } else {
            TrailingControl::Submit
        }
    }

    /// Applies one event and returns the notification to deliver once the
    /// new state is observable.
    pub fn apply(&mut self, event: SearchEvent) -> Option<SearchEffect> {
        match event {
            SearchEvent::Edit(text) => {
                let emptied = text.is_empty();
                self.value = text;
                self.submitted = emptied;
                if emptied {
                    // Erasing everything submits the empty query so the
                    // caller drops its filter without a second action.
                    Some(SearchEffect::Submitted(String::new()))
                } else {
                    None
                }
            }
            SearchEvent::Submit => {
                if !self.value.is_empty() {
                    self.submitted = true;
                }
                Some(SearchEffect::Submitted(self.value.clone()))
            }
            SearchEvent::Clear => {
                // An empty box already counts as committed, so only the
                // text needs resetting.
                self.value.clear();
                Some(SearchEffect::Cleared)
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SearchBoxProps {
    pub on_submit: EventHandler<String>,
    pub on_clear: EventHandler<()>,
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
}

#[component]
pub fn SearchBox(props: SearchBoxProps) -> Element {
    let mut state = use_signal({
        let seed = props.default_value.clone().unwrap_or_default();
        move || SearchState::seeded(&seed)
    });

    let on_submit = props.on_submit;
    let on_clear = props.on_clear;
    let mut dispatch = move |event: SearchEvent| {
        // The signal write completes before the callback runs, so the
        // caller always observes the post-transition state.
        let effect = state.write().apply(event);
        match effect {
            Some(SearchEffect::Submitted(text)) => {
                tracing::debug!("search submitted: {:?}", text);
                on_submit.call(text);
            }
            Some(SearchEffect::Cleared) => {
                tracing::debug!("search cleared");
                on_clear.call(());
            }
            None => {}
        }
    };

    let (value, control) = {
        let current = state.read();
        (current.value().to_string(), current.trailing_control())
    };
    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| "Search...".to_string());

    let trailing = match control {
        TrailingControl::None => rsx! {},
        TrailingControl::Submit => rsx! {
            button {
                class: "search-submit",
                r#type: "submit",
                "Enter"
            }
        },
        TrailingControl::Clear => rsx! {
            button {
                class: "search-clear",
                r#type: "button",
                onclick: move |_| dispatch(SearchEvent::Clear),
                "✕"
            }
        },
    };

    rsx! {
        form {
            class: "search-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                dispatch(SearchEvent::Submit);
            },
            div { class: "search-container",
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt| dispatch(SearchEvent::Edit(evt.value()))
                }
                {trailing}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effects_of(state: &mut SearchState, events: Vec<SearchEvent>) -> Vec<SearchEffect> {
        events
            .into_iter()
            .filter_map(|event| state.apply(event))
            .collect()
    }

    #[test]
    fn erasing_to_empty_auto_submits_the_empty_query() {
        let mut state = SearchState::default();
        state.apply(SearchEvent::Edit("roach".to_string()));

        let effect = state.apply(SearchEvent::Edit(String::new()));

        assert_eq!(effect, Some(SearchEffect::Submitted(String::new())));
        assert_eq!(state.value(), "");
        assert!(state.submitted());
        assert_eq!(state.trailing_control(), TrailingControl::None);
    }

    #[test]
    fn typing_shows_the_submit_affordance_without_notifying() {
        let mut state = SearchState::default();

        let effect = state.apply(SearchEvent::Edit("movr".to_string()));

        assert_eq!(effect, None);
        assert_eq!(state.value(), "movr");
        assert!(!state.submitted());
        assert_eq!(state.trailing_control(), TrailingControl::Submit);
    }

    #[test]
    fn submitting_marks_the_query_applied_and_swaps_to_clear() {
        let mut state = SearchState::default();
        state.apply(SearchEvent::Edit("abc".to_string()));

        let effect = state.apply(SearchEvent::Submit);

        assert_eq!(effect, Some(SearchEffect::Submitted("abc".to_string())));
        assert_eq!(state.value(), "abc");
        assert!(state.submitted());
        assert_eq!(state.trailing_control(), TrailingControl::Clear);
    }

    #[test]
    fn clearing_resets_the_text_and_notifies_once() {
        let mut state = SearchState::default();
        state.apply(SearchEvent::Edit("abc".to_string()));
        state.apply(SearchEvent::Submit);

        let effects = effects_of(&mut state, vec![SearchEvent::Clear]);

        assert_eq!(effects, vec![SearchEffect::Cleared]);
        assert_eq!(state.value(), "");
        assert_eq!(state.trailing_control(), TrailingControl::None);
    }

    #[test]
    fn repeated_submits_are_idempotent() {
        let mut state = SearchState::default();
        state.apply(SearchEvent::Edit("abc".to_string()));

        let effects = effects_of(&mut state, vec![SearchEvent::Submit, SearchEvent::Submit]);

        assert_eq!(
            effects,
            vec![
                SearchEffect::Submitted("abc".to_string()),
                SearchEffect::Submitted("abc".to_string()),
            ]
        );
        assert!(state.submitted());
        assert_eq!(state.trailing_control(), TrailingControl::Clear);
    }

    #[test]
    fn seeding_starts_unsubmitted_with_the_submit_affordance() {
        let state = SearchState::seeded("x");

        assert_eq!(state.value(), "x");
        assert!(!state.submitted());
        assert_eq!(state.trailing_control(), TrailingControl::Submit);
    }

    #[test]
    fn editing_an_applied_query_reverts_to_the_submit_affordance() {
        let mut state = SearchState::default();
        state.apply(SearchEvent::Edit("ab".to_string()));
        state.apply(SearchEvent::Submit);

        state.apply(SearchEvent::Edit("abc".to_string()));

        assert!(!state.submitted());
        assert_eq!(state.trailing_control(), TrailingControl::Submit);
    }

    #[test]
    fn full_cycle_type_submit_clear_retype() {
        let mut state = SearchState::default();
        let effects = effects_of(
            &mut state,
            vec![
                SearchEvent::Edit("db1".to_string()),
                SearchEvent::Submit,
                SearchEvent::Clear,
                SearchEvent::Edit("db2".to_string()),
            ],
        );

        assert_eq!(
            effects,
            vec![
                SearchEffect::Submitted("db1".to_string()),
                SearchEffect::Cleared,
            ]
        );
        assert_eq!(state.value(), "db2");
        assert_eq!(state.trailing_control(), TrailingControl::Submit);
    }
}
