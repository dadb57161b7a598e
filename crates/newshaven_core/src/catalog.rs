//! crates/newshaven_core/src/catalog.rs
//!
//! Fixed reference data: the topics and languages a summary can be built from,
//! and the demo identity and history shipped with the client.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{Summary, User};

pub const AVAILABLE_TOPICS: [&str; 12] = [
    "Tecnología",
    "Economía",
    "Política",
    "Ciencia",
    "Salud",
    "Deportes",
    "Entretenimiento",
    "Internacional",
    "Medio Ambiente",
    "Educación",
    "Cultura",
    "Sociedad",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: [Language; 4] = [
    Language { code: "es", name: "Español" },
    Language { code: "en", name: "Inglés" },
    Language { code: "fr", name: "Francés" },
    Language { code: "de", name: "Alemán" },
];

pub const DEFAULT_LANGUAGE: &str = "es";

pub fn language(code: &str) -> Option<Language> {
    LANGUAGES.iter().copied().find(|language| language.code == code)
}

//=========================================================================================
// Demo data
//=========================================================================================

pub const DEMO_EMAIL: &str = "demo@newshaven.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// The identity every successful demo login resolves to.
pub fn demo_user() -> User {
    User {
        id: "1".to_string(),
        name: "Usuario Demo".to_string(),
        email: DEMO_EMAIL.to_string(),
        avatar: Some("/placeholder-user.jpg".to_string()),
    }
}

/// The history a first-time client starts with, newest first.
pub fn demo_history(now: DateTime<Utc>) -> Vec<Summary> {
    let entry = |id: &str, title: &str, content: &str, days_ago: i64, topics: [&str; 3]| Summary {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        date: now - Duration::days(days_ago),
        topics: topics.iter().map(|t| t.to_string()).collect(),
        language: DEFAULT_LANGUAGE.to_string(),
        podcast_url: None,
        is_generating: false,
    };

    vec![
        entry(
            "1",
            "Resumen Tecnológico Semanal",
            "Esta semana en tecnología: Apple presenta nuevos productos, Google anuncia mejoras en IA, \
             y Microsoft lanza actualizaciones de seguridad importantes. El mercado de criptomonedas \
             muestra volatilidad mientras que las startups de IA continúan atrayendo inversiones récord.",
            1,
            ["Tecnología", "IA", "Criptomonedas"],
        ),
        entry(
            "2",
            "Noticias de Economía Global",
            "Los mercados globales muestran signos de recuperación tras las últimas decisiones de los \
             bancos centrales. La inflación en Europa se mantiene estable mientras que Asia reporta \
             crecimiento económico sostenido. Los expertos predicen un año prometedor para las \
             economías emergentes.",
            3,
            ["Economía", "Mercados", "Bancos Centrales"],
        ),
        entry(
            "3",
            "Avances en Ciencia y Salud",
            "Nuevos estudios revelan avances prometedores en tratamientos contra el cáncer. \
             Investigadores descubren propiedades beneficiosas en compuestos naturales. La OMS \
             actualiza sus recomendaciones sobre salud mental en el entorno digital.",
            5,
            ["Ciencia", "Salud", "Investigación"],
        ),
    ]
}
