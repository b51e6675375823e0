use chrono::NaiveDate;
use dinnerwheel_shared::Item;

/// How many of the most-generated names a summary reports.
const TOP_GENERATED: usize = 5;
/// How many trailing active dates the history keeps.
const HISTORY_DAYS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// The numbers behind the stats view: totals for both lists, the five
/// most-generated names, and per-date generation counts for the last
/// seven dates that saw any generation. Rendering (charts, percentages)
/// is the consumer's concern; this only counts and groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CollectionStats {
    pub total_dinners: usize,
    pub total_generated: usize,
    pub top_generated: Vec<NameCount>,
    pub generation_history: Vec<DateCount>,
}

pub fn collection_stats(pool: &[Item], generated: &[Item]) -> CollectionStats {
    let mut top_generated: Vec<NameCount> = Vec::new();
    for item in generated {
        match top_generated
            .iter_mut()
            .find(|entry| entry.name == item.name)
        {
            Some(entry) => entry.count += 1,
            None => top_generated.push(NameCount {
                name: item.name.clone(),
                count: 1,
            }),
        }
    }
    // Stable sort keeps first-generated names ahead on equal counts.
    top_generated.sort_by(|a, b| b.count.cmp(&a.count));
    top_generated.truncate(TOP_GENERATED);

    let mut generation_history: Vec<DateCount> = Vec::new();
    for item in generated {
        let date = item.created_at.date_naive();
        match generation_history
            .iter_mut()
            .find(|entry| entry.date == date)
        {
            Some(entry) => entry.count += 1,
            None => generation_history.push(DateCount { date, count: 1 }),
        }
    }
    generation_history.sort_by_key(|entry| entry.date);
    if generation_history.len() > HISTORY_DAYS {
        generation_history.drain(..generation_history.len() - HISTORY_DAYS);
    }

    CollectionStats {
        total_dinners: pool.len(),
        total_generated: generated.len(),
        top_generated,
        generation_history,
    }
}
