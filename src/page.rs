use crate::constants::*;
use card_core::constants::{PHOTO_SIZES, PHOTO_SRC, THEME_COLOR};
use card_core::content::CardContent;
use card_core::CardConfig;
use std::fmt::Write;
use web_sys as web;

/// Build the whole card inside `#card-root` and set the document metadata.
pub fn render(document: &web::Document, config: &CardConfig) -> anyhow::Result<()> {
    let content = &config.content;
    let root = document
        .get_element_by_id(ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ROOT_ID))?;
    root.set_inner_html(&markup(content, config.audio.track_title));
    document.set_title(&content.document_title());
    set_theme_color(document);
    log::info!(
        "[page] rendered; {} title letters, {} message letters",
        hero_letter_count(content),
        message_letter_count(content)
    );
    Ok(())
}

fn set_theme_color(document: &web::Document) {
    let existing = document
        .query_selector("meta[name=theme-color]")
        .ok()
        .flatten();
    let meta = match existing {
        Some(m) => m,
        None => {
            let Ok(m) = document.create_element("meta") else {
                return;
            };
            let _ = m.set_attribute("name", "theme-color");
            if let Some(head) = document.head() {
                let _ = head.append_child(&m);
            }
            m
        }
    };
    let _ = meta.set_attribute("content", THEME_COLOR);
}

/// Letters of the hero title, both words, in order.
pub fn hero_letters(content: &CardContent) -> impl Iterator<Item = char> + '_ {
    let (first, second) = content.hero_title;
    first.chars().chain(second.chars()).filter(|c| !c.is_whitespace())
}

pub fn hero_letter_count(content: &CardContent) -> usize {
    hero_letters(content).count()
}

pub fn message_letter_count(content: &CardContent) -> usize {
    content.message.chars().filter(|c| !c.is_whitespace()).count()
}

fn markup(c: &CardContent, track_title: &str) -> String {
    let mut html = String::with_capacity(16 * 1024);
    let _ = write!(html, r#"<canvas id="{SNOW_CANVAS_ID}" class="snow"></canvas>"#);
    welcome(&mut html, c);
    loading(&mut html, c);
    music(&mut html, track_title);
    let _ = write!(html, r#"<main id="{CONTENT_ID}" class="content" style="visibility:hidden">"#);
    ornaments(&mut html, c);
    hero(&mut html, c);
    message(&mut html, c);
    photo(&mut html, c);
    wishes(&mut html, c);
    new_year(&mut html, c);
    footer(&mut html, c);
    html.push_str("</main>");
    html
}

fn welcome(html: &mut String, c: &CardContent) {
    let _ = write!(
        html,
        r#"<div id="{WELCOME_ID}" class="overlay welcome">
<div class="welcome-inner">
<div id="{WELCOME_STAR_ID}" class="star">&#9733;</div>
<p class="kicker">{kicker}</p>
<h1 id="{WELCOME_TITLE_ID}" class="script">{title}</h1>
<p id="{WELCOME_SUBTITLE_ID}" class="subtitle">{subtitle} <span class="gold">{family}</span></p>
<button id="{WELCOME_BUTTON_ID}" class="gold-button" type="button">{button}</button>
</div>
</div>"#,
        kicker = escape(c.welcome_kicker),
        title = escape(c.welcome_title),
        subtitle = escape(c.welcome_subtitle),
        family = escape(c.family_name),
        button = escape(c.welcome_button),
    );
}

fn loading(html: &mut String, c: &CardContent) {
    let _ = write!(
        html,
        r#"<div id="{LOADING_ID}" class="overlay loading" style="display:none">
<div id="{LOADING_TEXT_ID}" class="loading-text">
<h2 class="script">{title}</h2>
<div class="progress"><div id="{LOADING_PROGRESS_ID}" class="progress-fill" style="transform:scaleX(0)"></div></div>
<p class="caption">{caption}</p>
</div>
</div>"#,
        title = escape(c.loading_title),
        caption = escape(c.loading_caption),
    );
}

fn music(html: &mut String, track_title: &str) {
    let _ = write!(
        html,
        r#"<div id="{MUSIC_PILL_ID}" class="music" style="display:none">
<span id="{MUSIC_NOTES_ID}" class="notes">&#9835;</span>
<span id="{MUSIC_TITLE_ID}" class="track" style="display:none">{title}</span>
<button id="{MUSIC_TOGGLE_ID}" class="music-button" type="button" aria-label="Play music">&#9654;</button>
<button id="{MUSIC_MUTE_ID}" class="music-button" type="button" aria-label="Mute music">&#128266;</button>
</div>"#,
        title = escape(track_title),
    );
}

fn ornaments(html: &mut String, c: &CardContent) {
    html.push_str(r#"<div class="ornaments" aria-hidden="true">"#);
    for o in &c.ornaments {
        let _ = write!(
            html,
            r#"<span class="ornament" style="{pos};color:{color};font-size:{size}rem;animation-delay:{delay}s">{icon}</span>"#,
            pos = o.position,
            color = o.color,
            size = o.size_rem,
            delay = o.delay_sec,
            icon = o.icon,
        );
    }
    html.push_str("</div>");
}

fn hero(html: &mut String, c: &CardContent) {
    let _ = write!(
        html,
        r#"<section id="{HERO_ID}" class="hero"><div id="{HERO_BG_ID}" class="hero-bg"></div><div class="hero-inner"><div class="stars">"#
    );
    for i in 0..HERO_STAR_COUNT {
        let _ = write!(
            html,
            r#"<span id="{HERO_STAR_PREFIX}{i}" class="star" style="opacity:0">&#9733;</span>"#
        );
    }
    html.push_str(r#"</div><h1 class="hero-title" style="perspective:1000px">"#);
    let mut index = 0;
    for word in [c.hero_title.0, c.hero_title.1] {
        html.push_str(r#"<span class="hero-word">"#);
        for ch in word.chars().filter(|c| !c.is_whitespace()) {
            let _ = write!(
                html,
                r#"<span id="{HERO_CHAR_PREFIX}{index}" class="hero-char" style="opacity:0">{}</span>"#,
                escape_char(ch)
            );
            index += 1;
        }
        html.push_str("</span>");
    }
    let _ = write!(
        html,
        r#"</h1>
<div id="{HERO_SUBTITLE_ID}" style="opacity:0"><p class="subtitle">{subtitle}</p>
<p id="{HERO_FAMILY_ID}" class="family">Keluarga <span class="gold">{family}</span></p></div>
</div>
<div id="{HERO_SCROLL_ID}" class="scroll-hint" style="opacity:0"><span>Scroll</span><span class="scroll-line"></span></div>
</section>"#,
        subtitle = escape(c.hero_subtitle),
        family = escape(c.family_name),
    );
}

fn message(html: &mut String, c: &CardContent) {
    let _ = write!(
        html,
        r#"<section id="{MESSAGE_ID}" class="message"><div class="message-inner">
<div id="{MESSAGE_DECOR_PREFIX}0" class="decor">&#10052;</div>
<p class="kicker">{kicker}</p>
<p class="message-text">"#,
        kicker = escape(c.message_kicker),
    );
    let mut index = 0;
    let mut first = true;
    for word in c.message.split_whitespace() {
        if !first {
            html.push(' ');
        }
        first = false;
        html.push_str(r#"<span class="word">"#);
        for ch in word.chars() {
            let _ = write!(
                html,
                r#"<span id="{MESSAGE_CHAR_PREFIX}{index}" class="char">{}</span>"#,
                escape_char(ch)
            );
            index += 1;
        }
        html.push_str("</span>");
    }
    let _ = write!(
        html,
        r#"</p>
<div id="{MESSAGE_SIGNATURE_ID}" class="signature"><p>{closing}</p><p class="script gold">Keluarga {family}</p></div>
<div id="{MESSAGE_DECOR_PREFIX}1" class="decor">&#10052;</div>
</div></section>"#,
        closing = escape(c.message_closing),
        family = escape(c.family_name),
    );
}

fn photo(html: &mut String, c: &CardContent) {
    let _ = write!(
        html,
        r#"<section id="{PHOTO_ID}" class="photo"><div class="photo-inner">
<div id="{PHOTO_TITLE_ID}" class="section-title"><h2 class="script">{title}</h2><p>{subtitle}</p></div>
<div id="{PHOTO_FRAME_ID}" class="photo-frame"><img src="{PHOTO_SRC}" sizes="{PHOTO_SIZES}" alt="{alt}" loading="lazy"></div>
<p id="{PHOTO_CAPTION_ID}" class="caption">{quote}</p>
</div></section>"#,
        title = escape(c.photo_title),
        subtitle = escape(c.photo_subtitle),
        alt = escape(&format!("Keluarga {}", c.family_name)),
        quote = escape(c.photo_quote),
    );
}

fn wishes(html: &mut String, c: &CardContent) {
    let _ = write!(
        html,
        r#"<section id="{WISHES_ID}" class="wishes"><div class="wishes-inner">
<div id="{WISHES_TITLE_ID}" class="section-title"><h2 class="script">{title}</h2><p>{subtitle}</p></div>
<div class="wish-grid">"#,
        title = escape(c.wishes_title),
        subtitle = escape(c.wishes_subtitle),
    );
    for (i, w) in c.wishes.iter().enumerate() {
        let (r, g, b) = w.accent;
        let _ = write!(
            html,
            r#"<article id="{WISH_PREFIX}{i}" class="wish-card"><div class="wish-icon" style="color:rgb({r},{g},{b})">{icon}</div><h3>{title}</h3><p>{desc}</p></article>"#,
            icon = w.icon,
            title = escape(w.title),
            desc = escape(w.description),
        );
    }
    html.push_str("</div></div></section>");
}

fn new_year(html: &mut String, c: &CardContent) {
    let _ = write!(
        html,
        r#"<section id="{NEW_YEAR_ID}" class="newyear"><div id="{NEW_YEAR_BG_ID}" class="newyear-bg"></div><div class="newyear-inner">
<p id="{NEW_YEAR_HEADER_ID}" class="kicker">{kicker}</p>
<h2 id="{NEW_YEAR_TITLE_ID}" class="script">{title}</h2>
<div id="{NEW_YEAR_YEAR_ID}" class="year">{year}</div>
<p id="{NEW_YEAR_DESC_ID}" class="subtitle">{message}</p>
<div id="{NEW_YEAR_BUTTON_ID}" class="gold-button">{button}</div>
</div></section>"#,
        kicker = escape(c.new_year_kicker),
        title = escape(c.new_year_title),
        year = escape(c.new_year),
        message = escape(c.new_year_message),
        button = escape(c.new_year_button),
    );
}

fn footer(html: &mut String, c: &CardContent) {
    let _ = write!(
        html,
        r#"<footer class="footer"><p>Merry Christmas {year} &amp; Happy New Year {next}</p><p class="gold">Keluarga {family}</p></footer>"#,
        year = escape(c.greeting_year),
        next = escape(c.new_year),
        family = escape(c.family_name),
    );
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        out.push_str(&escape_char(ch));
    }
    out
}

fn escape_char(ch: char) -> std::borrow::Cow<'static, str> {
    match ch {
        '&' => "&amp;".into(),
        '<' => "&lt;".into(),
        '>' => "&gt;".into(),
        '"' => "&quot;".into(),
        '\'' => "&#39;".into(),
        c => c.to_string().into(),
    }
}
