use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotedError, Result};
use crate::model::{Category, CategoryId, NewCategory};
use crate::store::DataStore;

/// Seeded by [`seed`]: `(name, icon, color)`.
pub const DEFAULT_CATEGORIES: [(&str, &str, &str); 5] = [
    ("Personal", "user", "#3b82f6"),
    ("Work", "briefcase", "#f59e0b"),
    ("Ideas", "lightbulb", "#ec4899"),
    ("Goals", "target", "#8b5cf6"),
    ("Recipes", "utensils", "#10b981"),
];

/// All categories, sorted by name.
pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut categories = store.list_categories()?;
    categories.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(CmdResult::default().with_categories(categories))
}

pub fn get<S: DataStore>(store: &S, id: CategoryId) -> Result<CmdResult> {
    Ok(CmdResult::default().with_categories(vec![store.get_category(id)?]))
}

pub fn create<S: DataStore>(store: &mut S, draft: NewCategory) -> Result<CmdResult> {
    if draft.name.trim().is_empty() {
        return Err(NotedError::Validation(
            "category name must not be empty".to_string(),
        ));
    }
    if store.list_categories()?.iter().any(|c| c.name == draft.name) {
        return Err(NotedError::Conflict(format!(
            "Category \"{}\" already exists",
            draft.name
        )));
    }

    let category = Category::new(store.next_category_id()?, draft);
    store.save_category(&category)?;
    tracing::info!(id = category.id, name = %category.name, "created category");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Category created: {}",
        category.name
    )));
    result.categories.push(category);
    Ok(result)
}

/// Removes a category. Notes filed under it are kept, with their category cleared.
pub fn remove<S: DataStore>(store: &mut S, id: CategoryId) -> Result<CmdResult> {
    let category = store.get_category(id)?;
    // Notes before the category row
    let detached = store.detach_category(id)?.len();
    store.delete_category(id)?;
    tracing::info!(id, detached, "deleted category");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Category deleted: {}",
        category.name
    )));
    if detached > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} note(s) no longer filed",
            detached
        )));
    }
    result.categories.push(category);
    Ok(result)
}

/// Creates the default categories that do not exist yet (matched by name).
pub fn seed<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for (name, icon, color) in DEFAULT_CATEGORIES {
        if store.list_categories()?.iter().any(|c| c.name == name) {
            continue;
        }
        let category = Category::new(
            store.next_category_id()?,
            NewCategory {
                name: name.to_string(),
                icon: Some(icon.to_string()),
                color: Some(color.to_string()),
            },
        );
        store.save_category(&category)?;
        result.categories.push(category);
    }
    result.add_message(CmdMessage::success(format!(
        "Seeded {} categor{}",
        result.categories.len(),
        if result.categories.len() == 1 { "y" } else { "ies" }
    )));
    Ok(result)
}
