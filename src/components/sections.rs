//! The four full-height sections of the greeting page.
//!
//! Copy is Armenian except the final heading; each block enters with its
//! own staggered reveal.

use dioxus::prelude::*;
use greeting_ui::{Motion, Reveal, Section, ShareButton};

/// Icons and captions for the appreciation cards, in display order.
pub const MEMORY_CARDS: [(&str, &str); 3] = [
    (
        "🌸",
        "Քո մի ժպիտը բավարար է՝ շրջապատին ջերմություն պարգևելու համար։",
    ),
    (
        "💫",
        "Քո ներկայությունը նման է արևի շողի՝ լուռ, բայց միշտ ջերմացնող։",
    ),
    ("📸", "Դու բարություն ես տարածում առանց գիտակցելու։"),
];

/// Reveal delay for the card at `index`, in seconds.
pub fn card_delay(index: usize) -> f32 {
    index as f32 * 0.2
}

/// Section 1: the greeting.
#[component]
pub fn GreetingSection() -> Element {
    rsx! {
        Section { background: "bg-greeting",
            Reveal { motion: Motion::Rise, delay: 0.5,
                h1 { class: "headline", "Շնորհավոր ծնունդդ, գեղեցկուհի։" }
            }
            Reveal { motion: Motion::Grow, delay: 1.2,
                div { class: "emoji-row", "🎂💖" }
            }
            Reveal { motion: Motion::Fade, delay: 1.8,
                p { class: "lead",
                    "Թող այս օրը լինի ինչպես դու՝ ժպտերես, բարի և լուսավոր։ "
                    "Թող ամեն պահ քեզ հիշեցնի, թե որքան թանկ ես դու նրանց համար, "
                    "ովքեր քեզ իսկապես գնահատում են։ 🌷"
                }
            }
        }
    }
}

/// Section 2: the message of love.
#[component]
pub fn LoveSection() -> Element {
    rsx! {
        Section { background: "bg-love",
            Reveal { motion: Motion::FromLeft,
                span { class: "emoji-badge", "✨" }
                h2 { class: "subheading",
                    "Դու այն մարդկանցից ես, որոնց ներկայությունը "
                    "պարզապես դարձնում է օրը ավելի լավը։ 🌤️"
                }
            }
            Reveal { motion: Motion::FromRight, delay: 0.3,
                p { class: "lead sans",
                    "Քո ժպիտը՝ ամենագեղեցիկը, "
                    "քո էներգիան՝ ամենազգացմունքայինը, "
                    "իսկ քո բարությունը՝ անկրկնելի։ 💖"
                    br {}
                    "Թող կյանքդ միշտ լցված լինի ժպիտներով և հրաշքներով։"
                }
            }
            Reveal { motion: Motion::Rise, delay: 0.6,
                div { class: "emoji-row small", "💕🌹🌟" }
            }
        }
    }
}

/// Section 3: memories and appreciation.
#[component]
pub fn MemoriesSection() -> Element {
    rsx! {
        Section { background: "bg-memories",
            Reveal { motion: Motion::Swell,
                h2 { class: "script-heading rose",
                    "Երբևէ մտածե՞լ ես, թե ինչ ազդեցություն ունես մարդկանց վրա։"
                }
            }
            Reveal { motion: Motion::Fade, delay: 0.5,
                div { class: "card-grid",
                    for (index, (icon, caption)) in MEMORY_CARDS.iter().enumerate() {
                        Reveal {
                            key: "{icon}",
                            motion: Motion::Rise,
                            delay: card_delay(index),
                            duration: 0.6,
                            class: "memory-card",
                            div { class: "icon", "{icon}" }
                            p { "{caption}" }
                        }
                    }
                }
            }
            Reveal { motion: Motion::Fade, delay: 1.0,
                p { class: "lead italic", "Եվ հենց դա է քեզ առանձնացնում։" }
            }
        }
    }
}

/// Section 4: the final wish and the share button.
#[component]
pub fn WishSection(copied: bool, on_share: EventHandler<()>) -> Element {
    rsx! {
        Section { background: "bg-wish",
            Reveal { motion: Motion::Drop,
                h2 { class: "script-heading plum", "My Wish For You" }
            }
            Reveal { motion: Motion::Fade, delay: 0.5,
                p { class: "lead wide",
                    "Թող այս տարին քեզ բերի ամենագեղեցիկ պահերը, "
                    "իրականանան բոլոր երազանքներդ, "
                    "ու երբեք չկորցնես այն փայլը, որը քեզ այդքան յուրահատուկ է դարձնում։ ✨"
                }
            }
            Reveal { motion: Motion::Grow, delay: 1.0,
                div { class: "emoji-row large", "💫🎉🎁" }
            }
            Reveal { motion: Motion::Fade, delay: 1.5,
                h3 { class: "closing-wish",
                    "Մի պարզ մաղթանք՝ միշտ մնա այնպիսին, ինչպես հիմա ես։"
                }
                div { class: "emoji-row", "❤️" }
            }
            Reveal { motion: Motion::Rise, delay: 2.0, duration: 0.6,
                ShareButton { copied, onclick: on_share }
            }
        }
    }
}
