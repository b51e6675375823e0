//! End-to-end persistence: the collection and the planner sharing one
//! JSON store file across sessions, the way the binary uses them.

use dinnerwheel::storage::JsonFileStore;
use dinnerwheel_collection::Collection;
use dinnerwheel_mealplan::Planner;
use dinnerwheel_shared::{DayOfWeek, PersistentStore, keys};
use temp_dir::TempDir;

#[test]
fn test_collection_survives_a_restart() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("store.json");

    let mut collection = Collection::load(JsonFileStore::open(&path).unwrap()).unwrap();
    let added = collection.add("Tacos").unwrap();
    collection.add("Pizza").unwrap();
    collection.record_generated("Tacos").unwrap();
    drop(collection);

    let collection = Collection::load(JsonFileStore::open(&path).unwrap()).unwrap();
    assert_eq!(collection.pool().len(), 2);
    assert_eq!(collection.pool()[0].id, added.id);
    assert_eq!(collection.generated().len(), 1);
}

#[test]
fn test_legacy_store_file_is_migrated_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("store.json");

    // A store file as an early version of the app would have written it.
    let mut store = JsonFileStore::open(&path).unwrap();
    store.set(keys::DINNERS, r#"["Pizza","Tacos"]"#).unwrap();
    drop(store);

    let collection = Collection::load(JsonFileStore::open(&path).unwrap()).unwrap();
    assert_eq!(collection.pool().len(), 2);
    assert_eq!(collection.pool()[0].name, "Pizza");
    assert!(!collection.pool()[0].id.is_empty(), "migrated items get ids");
}

#[test]
fn test_saved_plan_round_trips_through_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("store.json");
    let mut rng = rand::rng();

    let mut planner =
        Planner::load(JsonFileStore::open(&path).unwrap(), DayOfWeek::Monday).unwrap();
    planner.generate(3, &[], &mut rng).unwrap();
    let days = planner.plan().to_vec();
    let reference = planner.save_plan("weeknights").unwrap();
    drop(planner);

    let mut planner =
        Planner::load(JsonFileStore::open(&path).unwrap(), DayOfWeek::Monday).unwrap();
    assert_eq!(planner.saved_plans().len(), 1);
    planner.load_plan(&reference.id).unwrap();
    assert_eq!(planner.plan(), days.as_slice());

    planner.delete_plan(&reference.id).unwrap();
    drop(planner);

    let planner = Planner::load(JsonFileStore::open(&path).unwrap(), DayOfWeek::Monday).unwrap();
    assert!(planner.saved_plans().is_empty());
    assert!(
        planner
            .store()
            .get(&keys::meal_plan(&reference.id))
            .unwrap()
            .is_none(),
        "payload key removed with the index entry"
    );
}
