//! Then steps for to-do listing BDD scenarios.

use super::world::ToDoListingWorld;
use rstest_bdd_macros::then;
use sard_todo::todo::domain::ToDoItem;

fn listed_items(world: &ToDoListingWorld) -> Result<&[ToDoItem], eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(items)) => Ok(items.as_slice()),
        Some(Err(err)) => Err(eyre::eyre!("listing failed unexpectedly: {err}")),
        None => Err(eyre::eyre!("missing listing result")),
    }
}

#[then("the listing has {count:usize} items")]
fn listing_has_count(world: &ToDoListingWorld, count: usize) -> Result<(), eyre::Report> {
    let items = listed_items(world)?;
    if items.len() != count {
        return Err(eyre::eyre!(
            "expected {count} items, found {}: {items:?}",
            items.len()
        ));
    }
    Ok(())
}

#[then(r#"the listing contains "{evidence}" with output "{output}""#)]
fn listing_contains(
    world: &ToDoListingWorld,
    evidence: String,
    output: String,
) -> Result<(), eyre::Report> {
    let items = listed_items(world)?;
    let item = items
        .iter()
        .find(|item| item.evidence_path.as_str() == evidence)
        .ok_or_else(|| eyre::eyre!("no item for {evidence} in {items:?}"))?;
    if item.output_path.as_str() != output {
        return Err(eyre::eyre!(
            "expected output {output}, found {}",
            item.output_path
        ));
    }
    Ok(())
}

#[then(r#"the item for "{evidence}" has profile "{profile}""#)]
fn item_has_profile(
    world: &ToDoListingWorld,
    evidence: String,
    profile: String,
) -> Result<(), eyre::Report> {
    let items = listed_items(world)?;
    let item = items
        .iter()
        .find(|item| item.evidence_path.as_str() == evidence)
        .ok_or_else(|| eyre::eyre!("no item for {evidence}"))?;
    if item.profile.as_deref() != Some(profile.as_str()) {
        return Err(eyre::eyre!(
            "expected profile {profile}, found {:?}",
            item.profile
        ));
    }
    Ok(())
}

#[then(r#"the listing fails with a message containing "{text}""#)]
fn listing_fails(world: &ToDoListingWorld, text: String) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(err)) if err.to_string().contains(&text) => Ok(()),
        other => Err(eyre::eyre!(
            "expected failure containing '{text}', got {other:?}"
        )),
    }
}
