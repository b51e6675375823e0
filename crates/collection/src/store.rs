use dinnerwheel_shared::{Error, Item, PersistentStore, Result, keys};
use rand::Rng;

use crate::migrate::migrate_items;
use crate::selection;

/// Which of the two owned lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Pool,
    Generated,
}

impl ListKind {
    fn key(self) -> &'static str {
        match self {
            ListKind::Pool => keys::DINNERS,
            ListKind::Generated => keys::GENERATED_DINNERS,
        }
    }
}

/// The dinner collection: the pool of candidates and the history of
/// generated picks, bound to a persistent store.
///
/// Persistence is a side effect of mutation, not a caller responsibility:
/// every structural change re-serializes the affected list to its key
/// before returning.
pub struct Collection<S: PersistentStore> {
    store: S,
    pool: Vec<Item>,
    generated: Vec<Item>,
}

impl<S: PersistentStore> Collection<S> {
    /// Load both lists through the format migrator. Unparsable stored
    /// content degrades to an empty list; only store access itself can
    /// fail here.
    pub fn load(store: S) -> Result<Self> {
        let pool = migrate_items(store.get(keys::DINNERS)?.as_deref());
        let generated = migrate_items(store.get(keys::GENERATED_DINNERS)?.as_deref());

        tracing::debug!(
            pool = pool.len(),
            generated = generated.len(),
            "loaded dinner collection"
        );

        Ok(Self {
            store,
            pool,
            generated,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn pool(&self) -> &[Item] {
        &self.pool
    }

    pub fn generated(&self) -> &[Item] {
        &self.generated
    }

    /// Add a dinner to the pool. The name is trimmed first; an empty name
    /// or a case-insensitive duplicate of an existing pool name is
    /// rejected. Uniqueness is only checked at this moment, never
    /// retroactively.
    pub fn add(&mut self, name: &str) -> Result<Item> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        let lowered = name.to_lowercase();
        if self
            .pool
            .iter()
            .any(|item| item.name.to_lowercase() == lowered)
        {
            return Err(Error::DuplicateName(name.to_string()));
        }

        let item = Item::new(name);
        self.pool.push(item.clone());
        self.persist(ListKind::Pool)?;

        tracing::info!(name = %item.name, "added dinner to pool");

        Ok(item)
    }

    /// Remove an item by id. Absent ids are a no-op, not an error.
    pub fn remove(&mut self, id: &str, list: ListKind) -> Result<()> {
        let items = self.list_mut(list);
        let before = items.len();
        items.retain(|item| item.id != id);
        let changed = items.len() != before;

        if changed {
            self.persist(list)?;
        }

        Ok(())
    }

    /// Flip the pin flag on an item. Pinning is informational only and has
    /// no effect on draws. Absent ids are a no-op.
    pub fn toggle_pin(&mut self, id: &str, list: ListKind) -> Result<()> {
        let mut changed = false;
        for item in self.list_mut(list) {
            if item.id == id {
                item.pinned = !item.pinned;
                changed = true;
            }
        }

        if changed {
            self.persist(list)?;
        }

        Ok(())
    }

    pub fn clear(&mut self, list: ListKind) -> Result<()> {
        self.list_mut(list).clear();
        self.persist(list)
    }

    /// Summarize both lists for display.
    pub fn stats(&self) -> crate::stats::CollectionStats {
        crate::stats::collection_stats(&self.pool, &self.generated)
    }

    /// Pool items whose name contains `query`, case-insensitively. An
    /// empty query returns the full pool in original order. The query is
    /// matched as given; whitespace in it is significant.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        if query.trim().is_empty() {
            return self.pool.iter().collect();
        }

        let query = query.to_lowercase();
        self.pool
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Append one selection to the generated history as a new item: same
    /// name, fresh id and timestamp. The generated list is never
    /// identity-linked to the pool.
    pub fn record_generated(&mut self, name: &str) -> Result<Item> {
        let item = Item::new(name);
        self.generated.push(item.clone());
        self.persist(ListKind::Generated)?;
        Ok(item)
    }

    /// Draw `count` dinners from the pool and record each in the generated
    /// history. With duplicates disallowed, names already in the history
    /// are excluded from the draw.
    pub fn generate(
        &mut self,
        count: usize,
        allow_duplicates: bool,
        rng: &mut impl Rng,
    ) -> Result<Vec<Item>> {
        let exclude = selection::exclusion_set(&self.generated);
        let names: Vec<String> = selection::draw(&self.pool, count, allow_duplicates, &exclude, rng)?
            .into_iter()
            .map(|item| item.name.clone())
            .collect();

        let mut recorded = Vec::with_capacity(names.len());
        for name in &names {
            recorded.push(Item::new(name.as_str()));
        }
        self.generated.extend(recorded.iter().cloned());
        self.persist(ListKind::Generated)?;

        tracing::info!(count = recorded.len(), "generated dinners");

        Ok(recorded)
    }

    fn list(&self, list: ListKind) -> &Vec<Item> {
        match list {
            ListKind::Pool => &self.pool,
            ListKind::Generated => &self.generated,
        }
    }

    fn list_mut(&mut self, list: ListKind) -> &mut Vec<Item> {
        match list {
            ListKind::Pool => &mut self.pool,
            ListKind::Generated => &mut self.generated,
        }
    }

    fn persist(&mut self, list: ListKind) -> Result<()> {
        let raw = serde_json::to_string(self.list(list))
            .map_err(|err| Error::Storage(err.to_string()))?;
        self.store.set(list.key(), &raw)
    }
}
