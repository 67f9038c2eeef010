use crate::{Effect, Msg, SearchState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every filter change and every explicit trigger starts a new fetch cycle
/// built from the filters as they are after the message. Completions from any
/// cycle other than the latest issued one are dropped.
pub fn update(mut state: SearchState, msg: Msg) -> (SearchState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted | Msg::SearchSubmitted | Msg::RetryClicked => start_cycle(&mut state),
        Msg::EmploymentTypeToggled { kind, included } => {
            state.filters_mut().set_employment_type(kind, included);
            start_cycle(&mut state)
        }
        Msg::MinimumSalaryChanged(value) => {
            state.filters_mut().set_minimum_salary(value);
            start_cycle(&mut state)
        }
        Msg::SearchInputChanged(text) => {
            state.filters_mut().set_search_term(text);
            start_cycle(&mut state)
        }
        Msg::JobsFetched { cycle, outcome } => {
            if state.is_current(cycle) {
                match outcome {
                    Ok(jobs) => state.complete_success(jobs),
                    Err(reason) => state.complete_failure(cycle, reason),
                }
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn start_cycle(state: &mut SearchState) -> Vec<Effect> {
    let cycle = state.begin_cycle();
    vec![Effect::FetchJobs {
        cycle,
        filters: state.filters().clone(),
    }]
}
