use crate::messages::{ShellToUi, UiToShell};
use crate::snapshot::{load_snapshot, save_snapshot};
use crate::state::{ShellError, ShellState};

/// Dispatch a control-panel message and return a response.
///
/// A rejected parameter edit maps to [`ShellToUi::EditRejected`] and the
/// previous snapshot stays active; every other failure maps to
/// [`ShellToUi::Error`].
pub fn dispatch(state: &mut ShellState, msg: UiToShell) -> ShellToUi {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e @ ShellError::InvalidEdit(_)) => ShellToUi::EditRejected {
            message: e.to_string(),
        },
        Err(e) => ShellToUi::Error {
            message: e.to_string(),
        },
    }
}

fn handle_message(state: &mut ShellState, msg: UiToShell) -> Result<ShellToUi, ShellError> {
    match msg {
        UiToShell::EditNumber { field, value } => {
            state.set_number(field, value)?;
            Ok(model_updated(state))
        }
        UiToShell::EditToggle { toggle, enabled } => {
            state.set_toggle(toggle, enabled)?;
            Ok(model_updated(state))
        }

        UiToShell::AddSupport { height } => {
            state.add_support(height)?;
            Ok(model_updated(state))
        }
        UiToShell::UpdateSupport { index, height } => {
            state.update_support(index, height)?;
            Ok(model_updated(state))
        }
        UiToShell::RemoveSupport { index } => {
            state.remove_support(index)?;
            Ok(model_updated(state))
        }

        UiToShell::ExportDrawing => {
            let drawing = drawing_projector::project(state.model());
            let json = serde_json::to_string(&drawing).map_err(|e| ShellError::Serialization {
                reason: e.to_string(),
            })?;
            Ok(ShellToUi::DrawingDocument { json })
        }
        UiToShell::ExportScene => {
            let scene = scene_projector::project(state.model());
            let json = serde_json::to_string(&scene).map_err(|e| ShellError::Serialization {
                reason: e.to_string(),
            })?;
            Ok(ShellToUi::SceneDocument { json })
        }

        UiToShell::SaveSnapshot => Ok(ShellToUi::SnapshotSaved {
            data: save_snapshot(&state.project, state.params()),
        }),
        UiToShell::LoadSnapshot { data } => {
            let file = load_snapshot(&data)?;
            state.replace_params(file.params)?;
            state.project = file.project;
            Ok(model_updated(state))
        }
    }
}

fn model_updated(state: &ShellState) -> ShellToUi {
    ShellToUi::ModelUpdated {
        model: state.model().clone(),
    }
}
