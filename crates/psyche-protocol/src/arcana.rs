//! The Major Arcana table — the fixed classification target.
//!
//! 22 cards, ids 0–21, loaded once as a `const` table and never mutated.
//! Display names, archetype labels, and psychological descriptions are in
//! Russian (the deployment's target language); image URLs point at the
//! deck's CDN assets.

use serde::Serialize;

/// One Major Arcana card with its Jungian archetype mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcanaCard {
    /// Card id, 0–21, contiguous and unique within [`MAJOR_ARCANA`].
    pub id: u8,
    /// Display name (Russian).
    pub name: &'static str,
    /// Short symbolic archetype label (Russian).
    pub archetype: &'static str,
    /// Psychological description used as generator context (Russian).
    pub psychological: &'static str,
    /// Display image reference.
    pub image_url: &'static str,
}

/// The full deck. The deck's image files ship with the traditional
/// Strength/Justice numbering swap; URLs follow the filenames.
pub const MAJOR_ARCANA: [ArcanaCard; 22] = [
    ArcanaCard {
        id: 0,
        name: "Шут",
        archetype: "Дитя",
        psychological: "Новые начинания, спонтанность, невинность, прыжок веры.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/00_fool.png",
    },
    ArcanaCard {
        id: 1,
        name: "Маг",
        archetype: "Творец",
        psychological: "Сила воли, мастерство, концентрация, манифестация.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/01_magician.png",
    },
    ArcanaCard {
        id: 2,
        name: "Верховная Жрица",
        archetype: "Анима",
        psychological: "Интуиция, подсознание, тайна, внутренний голос.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/02_high_priestess.png",
    },
    ArcanaCard {
        id: 3,
        name: "Императрица",
        archetype: "Мать",
        psychological: "Плодородие, забота, изобилие, связь с природой.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/03_empress.png",
    },
    ArcanaCard {
        id: 4,
        name: "Император",
        archetype: "Отец",
        psychological: "Власть, структура, контроль, отцовство.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/04_emperor.png",
    },
    ArcanaCard {
        id: 5,
        name: "Иерофант",
        archetype: "Наставник",
        psychological: "Традиция, конформизм, мораль, этика.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/05_hierophant.png",
    },
    ArcanaCard {
        id: 6,
        name: "Влюбленные",
        archetype: "Союз",
        psychological: "Любовь, союз, отношения, согласование ценностей, выбор.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/06_lovers.png",
    },
    ArcanaCard {
        id: 7,
        name: "Колесница",
        archetype: "Воин",
        psychological: "Контроль, сила воли, победа, самоутверждение, решимость.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/07_chariot.png",
    },
    ArcanaCard {
        id: 8,
        name: "Сила",
        archetype: "Герой",
        psychological: "Мужество, убеждение, влияние, сострадание.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/08_justice.png",
    },
    ArcanaCard {
        id: 9,
        name: "Отшельник",
        archetype: "Мудрец",
        psychological: "Интроспекция, одиночество, внутреннее руководство, поиск истины.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/09_hermit.png",
    },
    ArcanaCard {
        id: 10,
        name: "Колесо Фортуны",
        archetype: "Судьба",
        psychological: "Циклы, карма, судьба, переломные моменты.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/10_wheel_of_fortune.png",
    },
    ArcanaCard {
        id: 11,
        name: "Справедливость",
        archetype: "Судья",
        psychological: "Справедливость, честность, истина, причина и следствие, закон.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/11_strength.png",
    },
    ArcanaCard {
        id: 12,
        name: "Повешенный",
        archetype: "Мученик",
        psychological: "Смирение, отпускание, новая перспектива, жертва.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/12_hanged_man.png",
    },
    ArcanaCard {
        id: 13,
        name: "Смерть",
        archetype: "Перерождение",
        psychological: "Окончания, перемены, трансформация, переход.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/13_death.png",
    },
    ArcanaCard {
        id: 14,
        name: "Умеренность",
        archetype: "Алхимик",
        psychological: "Баланс, модерация, терпение, цель.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/14_temperance.png",
    },
    ArcanaCard {
        id: 15,
        name: "Дьявол",
        archetype: "Тень",
        psychological: "Теневая сторона, привязанность, зависимость, ограничение, сексуальность.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/15_devil.png",
    },
    ArcanaCard {
        id: 16,
        name: "Башня",
        archetype: "Разрушитель",
        psychological: "Внезапные перемены, потрясение, хаос, откровение, пробуждение.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/16_tower.png",
    },
    ArcanaCard {
        id: 17,
        name: "Звезда",
        archetype: "Надежда",
        psychological: "Надежда, вера, цель, обновление, духовность.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/17_star.png",
    },
    ArcanaCard {
        id: 18,
        name: "Луна",
        archetype: "Мечтатель",
        psychological: "Иллюзия, страх, тревога, подсознание, сны.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/18_moon.png",
    },
    ArcanaCard {
        id: 19,
        name: "Солнце",
        archetype: "Сияющее Дитя",
        psychological: "Позитив, веселье, тепло, успех, жизненная сила.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/19_sun.png",
    },
    ArcanaCard {
        id: 20,
        name: "Страшный Суд",
        archetype: "Возрождение",
        psychological: "Суждение, возрождение, внутренний призыв, отпущение грехов.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/20_judgement.png",
    },
    ArcanaCard {
        id: 21,
        name: "Мир",
        archetype: "Самость",
        psychological: "Завершение, интеграция, достижение, путешествие.",
        image_url: "https://cdn.jsdelivr.net/gh/marataitester-blip/tarot/21_world.png",
    },
];

/// Look up a card by id. Returns `None` for ids outside 0–21.
pub fn card(id: u8) -> Option<&'static ArcanaCard> {
    MAJOR_ARCANA.get(id as usize)
}
