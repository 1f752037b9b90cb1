//! Given steps for to-do listing BDD scenarios.

use super::world::ToDoListingWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use sard_todo::todo::domain::CandidateRecord;

#[given(r#"a record with path "{path}" and status "{status}""#)]
fn record_with_status(
    world: &mut ToDoListingWorld,
    path: String,
    status: String,
) -> Result<(), eyre::Report> {
    world
        .source
        .push(CandidateRecord::new(path, status))
        .wrap_err("store record with status")
}

#[given(r#"a record with path "{path}" and no status and profile "{profile}""#)]
fn record_without_status(
    world: &mut ToDoListingWorld,
    path: String,
    profile: String,
) -> Result<(), eyre::Report> {
    world
        .source
        .push(CandidateRecord::new(path, "").with_profile(profile))
        .wrap_err("store record without status")
}

#[given(r#"a record without a path and status "{status}""#)]
fn record_without_path(world: &mut ToDoListingWorld, status: String) -> Result<(), eyre::Report> {
    world
        .source
        .push(CandidateRecord::new("", status))
        .wrap_err("store record without path")
}

#[given("the backend is unreachable")]
fn backend_unreachable(world: &mut ToDoListingWorld) -> Result<(), eyre::Report> {
    world
        .source
        .fail_with("connection refused")
        .wrap_err("configure backend failure")
}
