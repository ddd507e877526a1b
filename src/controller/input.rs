//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use super::AppController;

/// Ctrl on most platforms, Cmd/Super on macOS terminals that report it
fn has_platform_modifier(key: &KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
}

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        // Shortcuts that work regardless of focus
        if has_platform_modifier(&key) {
            match key.code {
                KeyCode::Char('k') | KeyCode::Char('K') => {
                    model.set_active_section(ActiveSection::Input).await;
                    return Ok(());
                }
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    model.set_should_quit(true).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab => {
                model.cycle_section_forward().await;
                return Ok(());
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
                return Ok(());
            }
            _ => {}
        }

        let ui_state = model.get_ui_state().await;

        match ui_state.active_section {
            ActiveSection::Input => match key.code {
                KeyCode::Enter => {
                    // Enter submits even while the button is disabled; the query is re-validated
                    drop(model);
                    self.submit_query().await;
                }
                KeyCode::Esc => {
                    model.update_query(String::new()).await;
                }
                KeyCode::Backspace => {
                    model.backspace_query().await;
                }
                KeyCode::Char(c) if !has_platform_modifier(&key) => {
                    model.append_to_query(c).await;
                }
                _ => {}
            },
            ActiveSection::Button => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    drop(model);
                    self.activate_search_button().await;
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    model.set_should_quit(true).await;
                }
                KeyCode::Esc => {
                    model.set_active_section(ActiveSection::Input).await;
                }
                _ => {}
            },
            ActiveSection::Results => match key.code {
                KeyCode::Up => {
                    model.scroll_results_up().await;
                }
                KeyCode::Down => {
                    model.scroll_results_down().await;
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    model.set_should_quit(true).await;
                }
                KeyCode::Esc => {
                    model.set_active_section(ActiveSection::Input).await;
                }
                _ => {}
            },
        }
        Ok(())
    }
}
