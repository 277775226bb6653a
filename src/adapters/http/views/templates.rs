use url::Url;

pub const SITE_NAME: &str = "Desi Bandhan";
const BRAND_NAME: &str = "DesiBandhan";
const TAGLINE: &str = "Where connections begin";
const LOCALE: &str = "en_IN";

const HOME_TITLE: &str = "Desi Bandhan - A Safe Space for Desi Couples & Friends";
const HOME_DESCRIPTION: &str = "Join Desi Bandhan, a safe and inclusive platform for desi couples and friends to connect, share, and grow together. Experience a community that celebrates love, diversity, and safety.";
const WAITLIST_TITLE: &str = "Join the Waitlist - Desi Bandhan";
const WAITLIST_DESCRIPTION: &str = "Be the first to know when Desi Bandhan launches. Join our waitlist for exclusive updates and early access.";

/// Title, description and OpenGraph data for one page.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub url: String,
    pub image: String,
}

impl PageMeta {
    pub fn home(origin: &Url) -> Self {
        Self::for_path(origin, "/", HOME_TITLE, HOME_DESCRIPTION)
    }

    pub fn waitlist(origin: &Url) -> Self {
        Self::for_path(origin, "/waitlist", WAITLIST_TITLE, WAITLIST_DESCRIPTION)
    }

    fn for_path(
        origin: &Url,
        path: &str,
        title: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            title,
            description,
            url: absolute_url(origin, path),
            image: absolute_url(origin, "/og-image.png"),
        }
    }
}

pub fn absolute_url(origin: &Url, path: &str) -> String {
    origin
        .join(path)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| format!("{}{}", origin.as_str().trim_end_matches('/'), path))
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn layout(meta: &PageMeta, body_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <meta property="og:url" content="{url}">
    <meta property="og:site_name" content="{site_name}">
    <meta property="og:image" content="{image}">
    <meta property="og:image:width" content="1200">
    <meta property="og:image:height" content="630">
    <meta property="og:image:alt" content="{title}">
    <meta property="og:locale" content="{locale}">
    <meta property="og:type" content="website">
    <style>{style}</style>
  </head>
  <body>
{body_html}
  </body>
</html>
"#,
        title = escape_html(meta.title),
        description = escape_html(meta.description),
        url = escape_html(&meta.url),
        image = escape_html(&meta.image),
        site_name = SITE_NAME,
        locale = LOCALE,
        style = BASE_STYLE,
        body_html = body_html,
    )
}

pub fn site_header(show_back_link: bool) -> String {
    let back = if show_back_link {
        r#"<a class="btn-outline" href="/">&larr; Back</a>"#
    } else {
        r#"<a class="btn-primary" href="/waitlist">Join the Waitlist</a>"#
    };
    format!(
        r#"<header class="site-header">
      <a class="brand" href="/">
        <span class="brand-mark">&hearts;</span>
        <span><strong>{BRAND_NAME}</strong><small>{TAGLINE}</small></span>
      </a>
      {back}
    </header>"#
    )
}

pub fn landing_page(meta: &PageMeta, waitlist_size: Option<u64>) -> String {
    let counter = waitlist_size
        .filter(|n| *n > 0)
        .map(|n| {
            format!(
                r#"<p class="counter" data-waitlist-count="{n}">{n} {people} already waiting</p>"#,
                people = if n == 1 { "person" } else { "people" }
            )
        })
        .unwrap_or_default();

    let body = format!(
        "{header}\n{hero}\n{testimonials}\n{how}\n{usp}\n{footer}",
        header = site_header(false),
        hero = hero_section(&counter),
        testimonials = testimonials_section(),
        how = how_it_works_section(),
        usp = usp_section(),
        footer = footer(),
    );
    layout(meta, &body)
}

fn hero_section(counter_html: &str) -> String {
    format!(
        r#"<section class="hero">
      <h1>A safe space for desi couples &amp; friends</h1>
      <p class="lead">Meet people who share your roots, your values and your sense of humour. {BRAND_NAME} is built for meaningful connections, at your own pace.</p>
      <a class="btn-primary" href="/waitlist">Join the Waitlist</a>
      {counter_html}
    </section>"#
    )
}

fn testimonials_section() -> String {
    let quotes = [
        (
            "Finally an app that understands where I come from. Can't wait for launch!",
            "Priya, Bengaluru",
        ),
        (
            "I want to meet people who get both Diwali and Friday night plans.",
            "Arjun, Mumbai",
        ),
        (
            "Safety first is exactly what I was looking for.",
            "Sneha, Hyderabad",
        ),
    ];
    let items: String = quotes
        .iter()
        .map(|(quote, who)| {
            format!(r#"<figure><blockquote>{quote}</blockquote><figcaption>{who}</figcaption></figure>"#)
        })
        .collect();
    format!(
        r#"<section class="testimonials">
      <h2>What early members are saying</h2>
      <div class="cards">{items}</div>
    </section>"#
    )
}

fn how_it_works_section() -> String {
    let steps = [
        ("Join the waitlist", "Tell us a little about yourself and what you are looking for."),
        ("Get early access", "We invite members in waves so every community starts strong."),
        ("Connect safely", "Verified profiles and thoughtful matching, built around trust."),
    ];
    let items: String = steps
        .iter()
        .enumerate()
        .map(|(i, (title, text))| {
            format!(r#"<li><span class="step">{}</span><h3>{title}</h3><p>{text}</p></li>"#, i + 1)
        })
        .collect();
    format!(
        r#"<section class="how-it-works">
      <h2>How it works</h2>
      <ol class="cards">{items}</ol>
    </section>"#
    )
}

fn usp_section() -> String {
    let points = [
        ("Safety first", "Verified members and tools that keep you in control."),
        ("Culturally aware", "Made for the desi diaspora and everyone in between."),
        ("More than dating", "Find a partner, a friend or your professional network."),
    ];
    let items: String = points
        .iter()
        .map(|(title, text)| format!(r#"<div><h3>{title}</h3><p>{text}</p></div>"#))
        .collect();
    format!(
        r#"<section class="usp">
      <h2>Why {BRAND_NAME}</h2>
      <div class="cards">{items}</div>
    </section>"#
    )
}

pub fn footer() -> String {
    format!(
        r#"<footer class="site-footer">
      <p>&copy; {SITE_NAME}. Made with love for desi hearts everywhere.</p>
    </footer>"#
    )
}

const BASE_STYLE: &str = "body{margin:0;font-family:system-ui,-apple-system,Segoe UI,sans-serif;color:#1e293b;background:linear-gradient(135deg,#eff6ff,#fff,#faf5ff);}\
.site-header{display:flex;justify-content:space-between;align-items:center;max-width:72rem;margin:0 auto;padding:1.5rem;}\
.brand{display:flex;gap:.75rem;align-items:center;color:inherit;text-decoration:none;}\
.brand small{display:block;color:#64748b;font-size:.8rem;}\
.brand-mark{display:inline-flex;width:3rem;height:3rem;align-items:center;justify-content:center;border-radius:1rem;background:linear-gradient(135deg,#e11d48,#7c3aed);color:#fff;font-size:1.4rem;}\
section,main{max-width:42rem;margin:0 auto;padding:2rem 1rem;text-align:center;}\
.cards{display:grid;gap:1rem;padding:0;list-style:none;}\
.btn-primary{display:inline-block;padding:.9rem 1.6rem;border:0;border-radius:.75rem;background:linear-gradient(90deg,#e11d48,#7c3aed);color:#fff;font-weight:600;text-decoration:none;cursor:pointer;}\
.btn-primary[disabled]{opacity:.6;cursor:wait;}\
.btn-outline{padding:.5rem 1rem;border:1px solid #cbd5e1;border-radius:.5rem;color:inherit;text-decoration:none;}\
form{text-align:left;background:#fff;border-radius:1.5rem;padding:2rem;box-shadow:0 10px 30px rgba(0,0,0,.06);}\
label{display:block;font-weight:500;margin-top:1rem;}\
input,select{width:100%;height:3rem;margin-top:.4rem;border:1px solid #e2e8f0;border-radius:.75rem;padding:0 .75rem;box-sizing:border-box;}\
.field-error{color:#dc2626;font-size:.85rem;margin:.3rem 0 0;}\
.toast{padding:.9rem 1.2rem;border-radius:.75rem;margin-bottom:1rem;}\
.toast-error{background:#fef2f2;color:#991b1b;}\
.toast-success{background:#f0fdf4;color:#166534;}\
.site-footer{text-align:center;color:#64748b;padding:2rem;}";
