//! Generation-instruction construction.
//!
//! One system context shared by every vendor adapter: persona framing, the
//! serialized Major Arcana table, interpretation structure and length
//! guidance, and the strict two-field JSON output contract.

use std::fmt::Write;

use psyche_protocol::MAJOR_ARCANA;

const PERSONA: &str = "Роль: ты — опытный юнгианский психоаналитик и мастер Таро. \
Твоя задача — глубоко проанализировать описание ситуации клиента: увидеть за словами \
эмоциональное состояние, скрытые конфликты и активный архетип, и выбрать ОДНУ карту \
Старших Арканов (id от 0 до 21), которая точнее всего резонирует с этим состоянием.";

const STRUCTURE: &str = "Структура интерпретации (Markdown для форматирования, но без блоков кода):\n\
- **Зеркало Ситуации**: как эта карта отражает текущую реальность и сознательное состояние клиента.\n\
- **Тень и Скрытое**: что вытесняется? в чем здесь аспект Тени?\n\
- **Путь Интеграции**: конкретный психологический совет, как двигаться дальше.";

const CONTRACT: &str = "Тон: мистический, эмпатичный, глубокий, серьезный. Язык: русский. \
Объем: не более 200 слов.\n\n\
Формат ответа: ТОЛЬКО сырой JSON-объект, без markdown-обёртки и пояснений:\n\
{\"cardId\": <целое число от 0 до 21>, \"interpretation\": \"<markdown-строка>\"}";

/// Build the system context for one resolution call. The deck table is
/// static, so the resolver builds this once at construction.
pub fn system_context() -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(PERSONA);
    out.push_str("\n\nСтаршие Арканы:\n");
    for card in &MAJOR_ARCANA {
        // "1. Маг (Творец) — Сила воли, мастерство, ..."
        writeln!(
            out,
            "{}. {} ({}) — {}",
            card.id, card.name, card.archetype, card.psychological
        )
        .expect("writing to String cannot fail");
    }
    out.push('\n');
    out.push_str(STRUCTURE);
    out.push_str("\n\n");
    out.push_str(CONTRACT);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_lists_every_card() {
        let context = system_context();
        for card in &MAJOR_ARCANA {
            assert!(context.contains(card.name), "missing card: {}", card.name);
            assert!(
                context.contains(card.psychological),
                "missing description for: {}",
                card.name
            );
        }
    }

    #[test]
    fn context_pins_the_output_contract() {
        let context = system_context();
        assert!(context.contains("\"cardId\""));
        assert!(context.contains("\"interpretation\""));
        assert!(context.contains("от 0 до 21"));
        assert!(context.contains("200 слов"));
    }

    #[test]
    fn context_is_stable() {
        assert_eq!(system_context(), system_context());
    }
}
