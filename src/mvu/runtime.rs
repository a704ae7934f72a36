use crate::mvu::browse::{BrowseModel, Deps, Msg, run_effect, update};

/// Runs the MVU loop for the browse model: seeds with `init_msg` and drains
/// effects until the model settles. Failures surface as model state, never
/// as an early exit.
pub async fn run_browse(model: &mut BrowseModel, init_msg: Msg, deps: Deps<'_>) {
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model, deps).await;
        effects.extend(update(model, msg));
    }
}
