//! History command handler

use crate::application::ports::HistoryStore;
use crate::application::HistoryService;

use super::args::HistoryAction;
use super::presenter::Presenter;

/// Handle history subcommand
pub async fn handle_history_command<S: HistoryStore>(
    action: HistoryAction,
    store: S,
    presenter: &Presenter,
) -> Result<(), String> {
    let service = HistoryService::new(store);

    match action {
        HistoryAction::List => handle_list(&service, presenter).await,
        HistoryAction::Show { id } => handle_show(&service, presenter, &id).await,
        HistoryAction::Delete { id } => handle_delete(&service, presenter, &id).await,
        HistoryAction::Clear { yes } => handle_clear(&service, presenter, yes).await,
    }
}

async fn handle_list<S: HistoryStore>(
    service: &HistoryService<S>,
    presenter: &Presenter,
) -> Result<(), String> {
    let cache = service.load().await.map_err(|e| e.to_string())?;

    if cache.is_empty() {
        presenter.info("No history found.");
        return Ok(());
    }

    for entry in cache.entries() {
        presenter.history_entry(entry);
    }
    Ok(())
}

async fn handle_show<S: HistoryStore>(
    service: &HistoryService<S>,
    presenter: &Presenter,
    id: &str,
) -> Result<(), String> {
    // Re-displays the stored text only; the audio is not retained
    match service.get(id).await.map_err(|e| e.to_string())? {
        Some(entry) => {
            presenter.info(&format!("File: {}", entry.source_file_name));
            presenter.output(&entry.text);
            Ok(())
        }
        None => Err(format!("No history entry with id: {}", id)),
    }
}

async fn handle_delete<S: HistoryStore>(
    service: &HistoryService<S>,
    presenter: &Presenter,
    id: &str,
) -> Result<(), String> {
    if service.delete(id).await.map_err(|e| e.to_string())? {
        presenter.success(&format!("Deleted entry {}", id));
    } else {
        // Deleting an unknown id is a no-op
        presenter.info("No matching entry; nothing deleted.");
    }
    Ok(())
}

async fn handle_clear<S: HistoryStore>(
    service: &HistoryService<S>,
    presenter: &Presenter,
    yes: bool,
) -> Result<(), String> {
    let cache = service.load().await.map_err(|e| e.to_string())?;

    if cache.is_empty() {
        presenter.info("History is already empty.");
        return Ok(());
    }

    let confirmed = yes
        || presenter.confirm(&format!(
            "Delete all {} saved transcription(s)?",
            cache.len()
        ));

    if !confirmed {
        presenter.info("Aborted.");
        return Ok(());
    }

    service.clear().await.map_err(|e| e.to_string())?;
    presenter.success("History cleared");
    Ok(())
}
