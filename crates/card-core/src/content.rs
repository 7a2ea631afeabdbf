//! Static copy of the card and the entrance timelines of its sections.
//!
//! Changing any of this is configuration, not logic: the frontend renders
//! whatever [`CardContent`] holds.

use crate::ease::Ease;
use crate::tween::{Entrance, Pose, Tween};

pub const FAMILY_NAME: &str = "Andik Sulianto";
pub const GREETING_YEAR: &str = "2025";
pub const NEW_YEAR: &str = "2026";

#[derive(Clone, Debug, PartialEq)]
pub struct Wish {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// `r, g, b` of the icon tint.
    pub accent: (u8, u8, u8),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ornament {
    pub icon: &'static str,
    /// Inline CSS placing the ornament.
    pub position: &'static str,
    pub color: &'static str,
    pub size_rem: f32,
    pub delay_sec: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardContent {
    pub family_name: &'static str,
    pub greeting_year: &'static str,
    pub new_year: &'static str,
    pub welcome_kicker: &'static str,
    pub welcome_title: &'static str,
    pub welcome_subtitle: &'static str,
    pub welcome_button: &'static str,
    pub loading_title: &'static str,
    pub loading_caption: &'static str,
    pub hero_title: (&'static str, &'static str),
    pub hero_subtitle: &'static str,
    pub message_kicker: &'static str,
    pub message: &'static str,
    pub message_closing: &'static str,
    pub photo_title: &'static str,
    pub photo_subtitle: &'static str,
    pub photo_quote: &'static str,
    pub wishes_title: &'static str,
    pub wishes_subtitle: &'static str,
    pub wishes: Vec<Wish>,
    pub new_year_kicker: &'static str,
    pub new_year_title: &'static str,
    pub new_year_message: &'static str,
    pub new_year_button: &'static str,
    pub ornaments: Vec<Ornament>,
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            family_name: FAMILY_NAME,
            greeting_year: GREETING_YEAR,
            new_year: NEW_YEAR,
            welcome_kicker: "Anda Menerima Kartu Natal",
            welcome_title: "Merry Christmas",
            welcome_subtitle: "Dari Keluarga",
            welcome_button: "Buka Kartu",
            loading_title: "Merry Christmas",
            loading_caption: "Loading...",
            hero_title: ("MERRY", "CHRISTMAS"),
            hero_subtitle: "Semoga damai dan sukacita menyertai Anda dan keluarga tercinta \
                            di musim yang penuh keajaiban ini",
            message_kicker: "Pesan dari Hati",
            message: "\u{201c}Natal bukan hanya tentang hari yang spesial, tetapi tentang hati \
                      yang penuh kasih. Di tengah dinginnya musim, kehangatan keluarga adalah \
                      hadiah terindah yang tidak ternilai harganya. Terima kasih telah menjadi \
                      bagian dari perjalanan hidup kami di tahun ini.\u{201d}",
            message_closing: "Dengan penuh kasih & doa,",
            photo_title: "Keluarga Kami",
            photo_subtitle: "Bersama dalam kasih, bersatu dalam doa",
            photo_quote: "\u{201c}Keluarga adalah hadiah terindah dari Tuhan\u{201d}",
            wishes_title: "Doa & Harapan Kami",
            wishes_subtitle: "Kiranya doa dan harapan terbaik kami menyertai perjalanan hidup Anda",
            wishes: vec![
                Wish {
                    icon: "\u{2665}",
                    title: "Kasih & Cinta",
                    description: "Semoga kasih dan cinta senantiasa memenuhi rumah tangga Anda \
                                  sepanjang tahun.",
                    accent: (239, 68, 68),
                },
                Wish {
                    icon: "\u{2728}",
                    title: "Sukacita",
                    description: "Semoga sukacita Natal terus bersinar dalam setiap langkah \
                                  perjalanan hidup Anda.",
                    accent: (234, 179, 8),
                },
                Wish {
                    icon: "\u{2605}",
                    title: "Berkat Melimpah",
                    description: "Semoga berkat Tuhan yang melimpah menyertai Anda dan keluarga \
                                  di tahun yang baru.",
                    accent: (245, 158, 11),
                },
                Wish {
                    icon: "\u{1f381}",
                    title: "Kebahagiaan",
                    description: "Semoga setiap hari dipenuhi dengan kebahagiaan dan kedamaian \
                                  yang sempurna.",
                    accent: (34, 197, 94),
                },
            ],
            new_year_kicker: "Menyambut Tahun Baru",
            new_year_title: "Happy New Year",
            new_year_message: "Semoga tahun yang baru membawa berkat, kesuksesan, dan \
                               kebahagiaan yang melimpah bagi Anda dan seluruh keluarga tercinta.",
            new_year_button: "Selamat merayakan dengan sukacita!",
            ornaments: vec![
                ornament("\u{2744}", "top:5rem;left:10%", "rgba(255,255,255,0.2)", 2.25, 0.0),
                ornament("\u{2605}", "top:10rem;right:15%", "rgba(234,179,8,0.3)", 1.875, 0.5),
                ornament("\u{1f381}", "top:60%;left:5%", "rgba(239,68,68,0.2)", 3.0, 1.0),
                ornament("\u{1f384}", "top:30%;right:8%", "rgba(34,197,94,0.2)", 2.25, 1.5),
                ornament("\u{1f514}", "bottom:10rem;left:12%", "rgba(250,204,21,0.25)", 1.875, 2.0),
                ornament("\u{2726}", "bottom:15rem;right:10%", "rgba(248,113,113,0.2)", 2.25, 2.5),
                ornament("\u{2728}", "top:45%;left:85%", "rgba(253,224,71,0.3)", 1.5, 3.0),
            ],
        }
    }
}

fn ornament(
    icon: &'static str,
    position: &'static str,
    color: &'static str,
    size_rem: f32,
    delay_sec: f32,
) -> Ornament {
    Ornament {
        icon,
        position,
        color,
        size_rem,
        delay_sec,
    }
}

impl CardContent {
    pub fn document_title(&self) -> String {
        format!(
            "Merry Christmas {} | From {} Family",
            self.greeting_year, self.family_name
        )
    }
}

// Welcome overlay entrance, played as soon as the page mounts.
pub const WELCOME_STAR: Entrance = Entrance::new(
    Pose {
        rotate_deg: 180.0,
        ..Pose::grow(0.0)
    },
    Tween::new(0.0, 1.0, Ease::BACK_OUT),
);
pub const WELCOME_TITLE: Entrance =
    Entrance::new(Pose::rise(30.0), Tween::new(0.5, 0.8, Ease::Power3Out));
pub const WELCOME_SUBTITLE: Entrance =
    Entrance::new(Pose::rise(20.0), Tween::new(0.8, 0.8, Ease::Power3Out));
pub const WELCOME_BUTTON: Entrance =
    Entrance::new(Pose::grow(0.8), Tween::new(1.1, 0.8, Ease::BACK_OUT));

// Hero entrance, played once the content is revealed. Staggered items use
// `Tween::nth`.
pub const HERO_STAR: Entrance = Entrance::new(
    Pose {
        rotate_deg: 180.0,
        ..Pose::grow(0.0)
    },
    Tween::new(0.5, 1.0, Ease::BACK_OUT),
);
pub const HERO_STAR_STAGGER: f32 = 0.2;
pub const HERO_TITLE_CHAR: Entrance = Entrance::new(
    Pose {
        rotate_x_deg: -90.0,
        ..Pose::rise(100.0)
    },
    Tween::new(0.8, 1.2, Ease::BACK_OUT),
);
pub const HERO_TITLE_STAGGER: f32 = 0.08;
pub const HERO_SUBTITLE: Entrance =
    Entrance::new(Pose::rise(30.0), Tween::new(1.8, 1.0, Ease::Power3Out));
pub const HERO_SCROLL_HINT: Entrance =
    Entrance::new(Pose::rise(-20.0), Tween::new(2.5, 1.0, Ease::Power3Out));

// Scroll-triggered reveals.
pub const REVEAL_RISE_SMALL: Entrance =
    Entrance::new(Pose::rise(20.0), Tween::new(0.0, 0.8, Ease::Power3Out));
pub const REVEAL_RISE: Entrance =
    Entrance::new(Pose::rise(30.0), Tween::new(0.0, 0.8, Ease::Power3Out));
pub const REVEAL_RISE_LARGE: Entrance =
    Entrance::new(Pose::rise(40.0), Tween::new(0.0, 0.8, Ease::Power3Out));
pub const REVEAL_CARD: Entrance =
    Entrance::new(Pose::rise(60.0), Tween::new(0.0, 0.8, Ease::Power3Out));
pub const REVEAL_CARD_STAGGER: f32 = 0.1;
pub const REVEAL_DECOR: Entrance =
    Entrance::new(Pose::grow(0.0), Tween::new(0.0, 0.8, Ease::BACK_OUT));
pub const REVEAL_DECOR_STAGGER: f32 = 0.15;
pub const REVEAL_PHOTO: Entrance =
    Entrance::new(Pose::grow(0.9), Tween::new(0.0, 1.0, Ease::Power3Out));
pub const REVEAL_YEAR: Entrance =
    Entrance::new(Pose::grow(0.8), Tween::new(0.2, 1.0, Ease::BACK_OUT));
