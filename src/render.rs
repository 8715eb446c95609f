//! User-facing message rendering
//!
//! Two rendering styles, matching what the bot sends: Markdown with
//! lightweight emphasis for prompts, HTML with bold/code spans for
//! result listings. All strings are Russian, same as the dataset's
//! primary language.

use crate::catalog::{EducationLevel, ProgramRecord};

/// Parse mode for an outgoing reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Markdown,
    Html,
}

/// One formatted outbound reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub markup: Markup,
}

impl Reply {
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: Markup::Markdown,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup: Markup::Html,
        }
    }
}

/// Greeting shown on `/start`, with the education-level choices.
pub fn greeting() -> Reply {
    Reply::markdown(
        "👋 *Привет!*\n\n\
         Этот бот поможет вам найти информацию об образовательных программах в Казахстане.\n\n\
         🔎 *Выберите уровень образования:*\n\
         /bachelor - Бакалавриат\n\
         /master - Магистратура\n\
         /doctorate - Докторантура",
    )
}

/// Stateless `/help` listing of all commands.
pub fn help() -> Reply {
    Reply::markdown(
        "📚 *Доступные команды:*\n\n\
         /start - Начать работу с ботом\n\
         /help - Показать список команд\n\
         /bachelor - Выбрать уровень образования 'Бакалавриат'\n\
         /master - Выбрать уровень образования 'Магистратура'\n\
         /doctorate - Выбрать уровень образования 'Докторантура'\n\
         /by_university - Искать программу по названию вуза\n\
         /by_specialty - Искать программу по специальности",
    )
}

/// Search-method choices shown after a level is selected.
pub fn search_method_prompt() -> Reply {
    Reply::markdown(
        "🔍 *Выберите способ поиска:*\n\
         /by_university - По названию вуза\n\
         /by_specialty - По специальности",
    )
}

/// Numbered university menu; `menu` is the canonical sorted sequence.
pub fn university_menu(menu: &[String]) -> Reply {
    let mut text = String::from("🏢 *Выберите ВУЗ:*");
    for (i, uni) in menu.iter().enumerate() {
        text.push_str(&format!("\n/{} - {}", i, uni));
    }
    Reply::markdown(text)
}

/// Free-text prompt for the specialty search path.
pub fn specialty_prompt() -> Reply {
    Reply::markdown("📝 *Введите ключевые слова для поиска специальности:*")
}

/// Result listing, or the single not-found message for an empty set.
///
/// The specialty path matches level-agnostically, so the title shown
/// here can be empty when the match was in another level or language
/// field than the one being displayed.
pub fn results(programs: &[&ProgramRecord], level: EducationLevel) -> Reply {
    if programs.is_empty() {
        return not_found();
    }
    let mut text = String::from("✅ <b>Результаты поиска:</b>\n\n");
    for program in programs {
        text.push_str(&format!(
            "<b>{}</b>\n• Программа: {}\n• Код: <code>{}</code>\n\n",
            program.name,
            program.title_for(level),
            program.name,
        ));
    }
    Reply::html(text)
}

/// Single message shown instead of an empty result list.
pub fn not_found() -> Reply {
    Reply::markdown("😔 *Программы не найдены.*")
}
