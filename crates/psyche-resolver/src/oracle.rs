//! Local oracle — deterministic, network-free fallback.
//!
//! When the remote generator fails, the oracle maps the situation text to a
//! card via a rolling polynomial hash and serves a pre-authored
//! interpretation. Pure function: same text in, byte-identical reading out.
//! No I/O, no clock, no randomness.

use psyche_protocol::Reading;

/// Pre-authored interpretations, one per card, indexed by card id.
const CANNED_INTERPRETATIONS: [&str; 22] = [
    // 0 Шут
    "Перед вами открывается чистый лист. Доверьтесь спонтанности: шаг в неизвестность \
     сейчас важнее готового плана.",
    // 1 Маг
    "У вас уже есть все инструменты, чтобы изменить ситуацию. Соберите волю в одну \
     точку — и намерение станет действием.",
    // 2 Верховная Жрица
    "Ответ не снаружи, а в глубине. Прислушайтесь к внутреннему голосу: он знает \
     больше, чем доводы рассудка.",
    // 3 Императрица
    "Ситуация просит заботы и терпения, а не давления. Позвольте процессу вызреть, \
     как вызревает всё живое.",
    // 4 Император
    "Хаос отступает перед структурой. Верните себе авторство: границы, порядок и \
     ясные правила сейчас — ваша опора.",
    // 5 Иерофант
    "Не изобретайте путь с нуля — обопритесь на традицию и опыт тех, кто проходил \
     это до вас. Наставник ближе, чем кажется.",
    // 6 Влюбленные
    "Сердцевина ситуации — выбор и согласование ценностей. Честный ответ себе \
     важнее одобрения со стороны.",
    // 7 Колесница
    "Победа достижима, но требует управления противоположными импульсами. Возьмите \
     поводья и держите курс.",
    // 8 Сила
    "Не подавляйте внутреннего зверя — приручите его. Мягкая настойчивость сильнее \
     грубого усилия.",
    // 9 Отшельник
    "Пришло время уединения. Отойдите от шума: истина, которую вы ищете, говорит тихо.",
    // 10 Колесо Фортуны
    "Колесо уже повернулось. Не цепляйтесь за прежний цикл — переломный момент несет \
     новые возможности.",
    // 11 Справедливость
    "Причина и следствие сходятся в одной точке. Взвесьте всё честно: равновесие \
     восстановится через правду.",
    // 12 Повешенный
    "Ситуация не сдвинется усилием — только сменой перспективы. Отпустите контроль \
     и посмотрите на всё вверх ногами.",
    // 13 Смерть
    "Нечто завершилось, и это необратимо. Отпустите отжившее: трансформация уже \
     началась.",
    // 14 Умеренность
    "Крайности истощают. Ищите средний путь: терпеливое смешение противоположностей \
     даст новое качество.",
    // 15 Дьявол
    "Присмотритесь к своим привязанностям — цепи, которые держат, часто надеты \
     добровольно. Тень просит признания, а не борьбы.",
    // 16 Башня
    "Рушится не жизнь, а конструкция, которая ей мешала. Потрясение освобождает \
     место для подлинного.",
    // 17 Звезда
    "После бури небо очистилось. Надежда — не иллюзия, а ориентир: двигайтесь к \
     нему небольшими шагами.",
    // 18 Луна
    "Страхи и иллюзии искажают картину. Не принимайте решений в тумане — дождитесь \
     рассвета и проверяйте догадки.",
    // 19 Солнце
    "Энергия на вашей стороне. Позвольте себе радость и открытость: успех приходит \
     к тому, кто перестал прятаться.",
    // 20 Страшный Суд
    "Внутренний призыв звучит всё громче. Подведите итог прошлому и ответьте на \
     него — время возрождения.",
    // 21 Мир
    "Цикл завершается целостностью. Интегрируйте пройденное: вы уже не тот, кто \
     начинал этот путь.",
];

/// Served if a card id ever misses the table above.
const GENERIC_INTERPRETATION: &str =
    "Архетипы молчат о частностях, но путь всегда один: всмотритесь в ситуацию без \
     страха — ответ уже зреет внутри вас.";

/// Deterministic fallback generator.
pub struct LocalOracle;

impl LocalOracle {
    pub fn new() -> Self {
        Self
    }

    /// Map arbitrary text to a reading. Total function, no failure mode.
    pub fn compute(&self, text: &str) -> Reading {
        let card_id = (situation_hash(text).unsigned_abs() % 22) as u8;
        let interpretation = CANNED_INTERPRETATIONS
            .get(card_id as usize)
            .copied()
            .unwrap_or(GENERIC_INTERPRETATION);
        Reading {
            card_id,
            interpretation: interpretation.to_string(),
        }
    }
}

impl Default for LocalOracle {
    fn default() -> Self {
        Self::new()
    }
}

/// Rolling polynomial hash over the UTF-16 code units of the input,
/// `h = h*31 + unit` with 32-bit signed wraparound — the historical
/// behavior the card selection must stay compatible with.
fn situation_hash(text: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(unit as i32);
    }
    hash
}
