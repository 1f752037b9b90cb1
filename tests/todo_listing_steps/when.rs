//! When steps for to-do listing BDD scenarios.

use super::world::{ToDoListingWorld, run_async};
use rstest_bdd_macros::when;

#[when("the to-do listing is requested")]
fn listing_requested(world: &mut ToDoListingWorld) {
    let result = run_async(world.service.list_todo());
    world.last_result = Some(result);
}
