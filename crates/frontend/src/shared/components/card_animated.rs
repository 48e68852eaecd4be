//! CardAnimated: Thaw Card, появляющаяся снизу с затуханием.
//!
//! Анимация определена в `style/main.css` (`@keyframes card-rise`).
//!
//! # Пример
//! ```rust,ignore
//! <CardAnimated style="max-width: 48rem;">
//!     <p>"Контент"</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Длительность анимации по умолчанию, мс
const DEFAULT_DURATION_MS: u32 = 500;

#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах
    #[prop(optional)]
    delay_ms: u32,
    /// Длительность анимации (по умолчанию 500 мс)
    #[prop(optional)]
    duration_ms: Option<u32>,
    /// Дополнительные inline-стили
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = animation_style(duration_ms.unwrap_or(DEFAULT_DURATION_MS), delay_ms, &style);

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}

fn animation_style(duration_ms: u32, delay_ms: u32, extra: &str) -> String {
    let animation = format!(
        "animation: card-rise {}ms ease-out {}ms both;",
        duration_ms, delay_ms
    );
    if extra.is_empty() {
        animation
    } else {
        format!("{} {}", animation, extra)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_style() {
        assert_eq!(
            animation_style(500, 0, ""),
            "animation: card-rise 500ms ease-out 0ms both;"
        );
        assert_eq!(
            animation_style(300, 80, "border: 2px solid;"),
            "animation: card-rise 300ms ease-out 80ms both; border: 2px solid;"
        );
    }
}
