pub mod enums;
pub mod prelude;

use std::ops::ControlFlow;

use dptree::prelude::*;

use crate::world::person::roles::InfoRole;

use self::enums::{Answer, DoctorMove, HackerChoice, MutantMove};

pub type ConsoleHandler<T> = Endpoint<'static, DependencyMap, T>;

pub(super) fn root<T>() -> ConsoleHandler<T>
where
    T: Send + Sync + 'static,
{
    dptree::filter_map(|req: String| Some(Answer(req.trim().to_lowercase())))
}

pub(super) fn starting_with<T>(trigger: &'static str) -> ConsoleHandler<T>
where
    T: Send + Sync + 'static,
{
    dptree::filter(move |answer: Answer| answer.0.starts_with(trigger))
}

pub(super) fn empty<T>() -> ConsoleHandler<T>
where
    T: Send + Sync + 'static,
{
    dptree::filter(|answer: Answer| answer.0.is_empty())
}

pub(super) fn info_role<T>() -> ConsoleHandler<T>
where
    T: Send + Sync + 'static,
{
    dptree::filter_map(|answer: Answer| InfoRole::from_prefix(&answer.0))
}

/// "Infect or kill?": anything starting with `k` kills.
pub(super) fn mutant_moves() -> ConsoleHandler<MutantMove> {
    root()
        .branch(starting_with("k").endpoint(|| async { MutantMove::Kill }))
        .endpoint(|| async { MutantMove::Infect })
}

/// "Heal or kill?": anything starting with `k` kills.
pub(super) fn doctor_moves() -> ConsoleHandler<DoctorMove> {
    root()
        .branch(starting_with("k").endpoint(|| async { DoctorMove::Kill }))
        .endpoint(|| async { DoctorMove::Heal })
}

pub(super) fn hacker_choices() -> ConsoleHandler<HackerChoice> {
    root()
        .branch(empty().endpoint(|| async { HackerChoice::GiveUp }))
        .branch(
            info_role().endpoint(|role: InfoRole| async move { HackerChoice::Hack(role) }),
        )
        .endpoint(|| async { HackerChoice::Unknown })
}

pub(super) async fn decide<T>(handler: &ConsoleHandler<T>, line: String) -> Option<T>
where
    T: Send + Sync + 'static,
{
    match handler.dispatch(dptree::deps![line]).await {
        ControlFlow::Break(decision) => Some(decision),
        ControlFlow::Continue(_) => None,
    }
}
