//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI- und Agent-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Selektion ===
            AppCommand::BeginSelectionDrag { pos } => handlers::selection::begin_drag(state, pos),
            AppCommand::UpdateSelectionDrag { pos } => {
                handlers::selection::update_drag(state, pos)
            }
            AppCommand::SetSelectionRect { start, end } => {
                handlers::selection::set_rect(state, start, end)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Benannte Layer ===
            AppCommand::CreateNamedLayer { name } => handlers::layers::create(state, &name),
            AppCommand::RenameNamedLayer { old, new } => {
                handlers::layers::rename(state, &old, &new)
            }
            AppCommand::DeleteNamedLayer {
                name,
                cascade,
                contents,
            } => handlers::layers::delete(state, &name, cascade, contents),
            AppCommand::ActivateNamedLayer { name } => handlers::layers::activate(state, &name),
            AppCommand::DeactivateNamedLayer => handlers::layers::deactivate(state),
            AppCommand::MoveNamedLayer { name, parent } => {
                handlers::layers::move_to(state, &name, parent.as_deref())
            }

            // === Platzierung ===
            AppCommand::PlaceBuffer {
                buffer,
                origin,
                accept_explicit_clear,
            } => handlers::placement::place_buffer(state, &buffer, origin, accept_explicit_clear),
            AppCommand::ClearRect { rect } => handlers::placement::clear_rect(state, rect),
            AppCommand::RunGenerator { args, origin } => {
                handlers::placement::run_generator(state, &args, origin)
            }

            // === Undo ===
            AppCommand::Undo { scope } => handlers::history::undo(state, scope),
            AppCommand::MarkNewTurn => handlers::history::mark_new_turn(state),

            // === Datei-I/O ===
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
        }

        Ok(())
    }
}
