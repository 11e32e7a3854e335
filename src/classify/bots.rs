//! Known crawler and link-preview user agents.

use std::sync::LazyLock;

/// User-agent substrings that identify crawlers. Matching is case-insensitive.
pub const BOT_AGENTS: &[&str] = &[
    "googlebot",
    "APIs-Google",
    "Mediapartners-Google",
    "AdsBot-Google",
    "Mediapartners-Google",
    "FeedFetcher-Google",
    "Google-Read-Aloud",
    "DuplexWeb-Google",
    "googleweblight",
    "Storebot-Google",
    "Yahoo! Slurp",
    "bingbot",
    "yandex",
    "baiduspider",
    "facebookexternalhit",
    "twitterbot",
    "rogerbot",
    "linkedinbot",
    "embedly",
    "quora link preview",
    "showyoubot",
    "outbrain",
    "pinterest/0.",
    "developers.google.com/+/web/snippet",
    "slackbot",
    "vkShare",
    "W3C_Validator",
    "redditbot",
    "Applebot",
    "WhatsApp",
    "Linespider",
    "flipboard",
    "tumblr",
    "bitlybot",
    "SkypeUriPreview",
    "nuzzel",
    "Discordbot",
    "Google Page Speed",
    "Qwantify",
    "pinterestbot",
    "Bitrix link preview",
    "XING-contenttabreceiver",
    "Chrome-Lighthouse",
    "AhrefsBot",
    "AhrefsSiteAudit",
];

static BOT_AGENTS_LOWER: LazyLock<Vec<String>> =
    LazyLock::new(|| BOT_AGENTS.iter().map(|a| a.to_lowercase()).collect());

/// Returns true if the user agent contains any known bot identifier.
pub fn is_bot(user_agent: &str) -> bool {
    let user_agent = user_agent.to_lowercase();
    BOT_AGENTS_LOWER
        .iter()
        .any(|agent| user_agent.contains(agent.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_agent_matches() {
        for agent in BOT_AGENTS {
            let ua = format!("Mozilla/5.0 (compatible; {}/1.0)", agent.to_uppercase());
            assert!(is_bot(&ua), "{} should be detected", agent);
        }
    }

    #[test]
    fn test_real_user_agents() {
        assert!(is_bot("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"));
        assert!(is_bot("facebookexternalhit/1.1 (+http://www.facebook.com/externalhit_uatext.php)"));
        assert!(is_bot("Mozilla/5.0 (compatible; bingbot/2.0; +http://www.bing.com/bingbot.htm)"));
        assert!(is_bot("Slackbot-LinkExpanding 1.0 (+https://api.slack.com/robots)"));
        assert!(is_bot("WhatsApp/2.19.81 A"));
    }

    #[test]
    fn test_browsers_are_not_bots() {
        assert!(!is_bot(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
        ));
        assert!(!is_bot(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148"
        ));
        assert!(!is_bot("curl/8.4.0"));
        assert!(!is_bot(""));
    }

    #[test]
    fn test_list_is_literal() {
        // "pinterest/0." needs the literal dot, not any character.
        assert!(!is_bot("Pinterest/0x"));
        assert!(is_bot("Pinterest/0.2 (+http://www.pinterest.com/)"));
    }
}
