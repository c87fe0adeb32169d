//! Per-domain URL normalization rules.
//!
//! Most platforms append tracking or session data as trailing query
//! parameters. Each rule here rewrites a fully-resolved URL for one family
//! of hosts; truncation at a fixed marker is deliberately simple and robust
//! against unknown parameter sets. The one exception is xiaohongshu, whose
//! `xsec_token` parameter is required for the link to resolve at all and
//! must be preserved.

use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use url::Url;

use crate::error_handling::ResolutionError;
use crate::resolve::Resolve;

/// Query parameter appended to every cleaned xiaohongshu link.
const XSEC_SOURCE: (&str, &str) = ("xsec_source", "pc_user");

/// Normalization rules, declared in dispatch priority order.
///
/// `Rule::for_host` walks the variants top to bottom and the first host
/// match wins; [`Rule::Passthrough`] matches everything and closes the
/// table, so dispatch can never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Rule {
    /// Exact `x.com`: rewrite the hostname to the embed-friendly
    /// `fixupx.com` mirror, keeping path, query, and fragment.
    FixupX,
    /// xiaohongshu and its `xhslink` short-link host: keep only
    /// `xsec_token` (when present) and append `xsec_source=pc_user`.
    Xiaohongshu,
    /// WeChat articles: cut the URL at the literal `&chksm` marker.
    Weixin,
    /// NetEase Cloud Music: cut the URL at the first `&`.
    NeteaseMusic,
    /// NetEase `163cn.tv` short links: resolve first, then cut at the
    /// first `&` of the resolved URL.
    NeteaseShortLink,
    /// Any other host: strip the whole query.
    Passthrough,
}

impl Rule {
    /// Whether this rule's host predicate matches `host`.
    pub fn matches(&self, host: &str) -> bool {
        match self {
            Rule::FixupX => host == "x.com",
            Rule::Xiaohongshu => host.contains("xiaohongshu") || host.contains("xhslink"),
            Rule::Weixin => host.contains("weixin"),
            Rule::NeteaseMusic => host.contains("music.163.com"),
            Rule::NeteaseShortLink => host.contains("163cn.tv"),
            Rule::Passthrough => true,
        }
    }

    /// Selects the first rule whose predicate matches `host`.
    pub fn for_host(host: &str) -> Rule {
        Rule::iter()
            .find(|rule| rule.matches(host))
            .unwrap_or(Rule::Passthrough)
    }
}

/// Applies per-domain normalization to fully-resolved URLs.
///
/// Holds the resolver capability because the `163cn.tv` rule performs a
/// second, independent network round trip after the generic resolution has
/// already run; every other rule is pure.
pub struct RuleEngine<R: Resolve> {
    resolver: R,
}

impl<R: Resolve> RuleEngine<R> {
    /// Creates a rule engine backed by `resolver` for the nested case.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Rewrites `url` according to the first matching rule.
    ///
    /// Falls through to the default rule when no host predicate matches, so
    /// the engine always produces an output.
    ///
    /// # Errors
    ///
    /// Only the `163cn.tv` rule can fail, with [`ResolutionError`], because
    /// it resolves a second redirect chain.
    pub async fn clean(&self, url: &str) -> Result<String, ResolutionError> {
        let Ok(parsed) = Url::parse(url) else {
            // Resolved URLs are always parseable in practice; pass through
            // rather than fail if that invariant is ever violated.
            log::warn!("Rule engine received an unparseable URL, passing it through: {url}");
            return Ok(url.to_string());
        };

        let host = parsed.host_str().unwrap_or_default().to_string();
        let rule = Rule::for_host(&host);
        log::debug!("Applying {rule:?} rule to {url}");

        match rule {
            Rule::FixupX => Ok(rewrite_host(parsed, "fixupx.com")),
            Rule::Xiaohongshu => Ok(keep_xsec_token(parsed)),
            Rule::Weixin => Ok(truncate_at(url, "&chksm")),
            Rule::NeteaseMusic => Ok(truncate_at(url, "&")),
            Rule::NeteaseShortLink => {
                // The generic pass upstream has already run once; this is a
                // second, independent round trip against the short link.
                let resolved = self.resolver.resolve(url).await?;
                Ok(truncate_at(&resolved, "&"))
            }
            Rule::Passthrough => {
                let mut stripped = parsed;
                stripped.set_query(None);
                Ok(stripped.to_string())
            }
        }
    }
}

/// Swaps the hostname, keeping scheme, path, query, and fragment.
fn rewrite_host(mut url: Url, host: &str) -> String {
    if let Err(e) = url.set_host(Some(host)) {
        log::warn!("Could not rewrite host to {host}: {e}");
    }
    url.to_string()
}

/// Keeps only the `xsec_token` parameter (when present), then appends
/// `xsec_source=pc_user`. Every other query parameter is dropped.
fn keep_xsec_token(mut url: Url) -> String {
    let token = url
        .query_pairs()
        .find(|(key, _)| key == "xsec_token")
        .map(|(_, value)| value.into_owned());

    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(token) = &token {
            pairs.append_pair("xsec_token", token);
        }
        pairs.append_pair(XSEC_SOURCE.0, XSEC_SOURCE.1);
    }
    url.to_string()
}

/// Cuts `url` at the first occurrence of the literal `marker`, keeping
/// everything before it; unchanged when the marker is absent.
///
/// Truncation is string-based on purpose: it matches the upstream behavior
/// exactly, including its blindness to URL-encoded ampersands.
fn truncate_at(url: &str, marker: &str) -> String {
    match url.find(marker) {
        Some(index) => url[..index].to_string(),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Resolver stand-in that answers with a canned URL and never touches
    /// the network.
    struct StubResolver {
        resolved: String,
    }

    impl Resolve for StubResolver {
        async fn resolve(&self, _url: &str) -> Result<String, ResolutionError> {
            Ok(self.resolved.clone())
        }
    }

    fn engine_with(resolved: &str) -> RuleEngine<StubResolver> {
        RuleEngine::new(StubResolver {
            resolved: resolved.to_string(),
        })
    }

    /// Engine for rules that never resolve; the stub's answer is a marker
    /// that would make any accidental resolution obvious in assertions.
    fn pure_engine() -> RuleEngine<StubResolver> {
        engine_with("https://unexpected.example/resolver-should-not-run")
    }

    #[test]
    fn test_dispatch_order_first_match_wins() {
        assert_eq!(Rule::for_host("x.com"), Rule::FixupX);
        assert_eq!(Rule::for_host("www.xiaohongshu.com"), Rule::Xiaohongshu);
        assert_eq!(Rule::for_host("xhslink.com"), Rule::Xiaohongshu);
        assert_eq!(Rule::for_host("mp.weixin.qq.com"), Rule::Weixin);
        assert_eq!(Rule::for_host("music.163.com"), Rule::NeteaseMusic);
        assert_eq!(Rule::for_host("163cn.tv"), Rule::NeteaseShortLink);
        assert_eq!(Rule::for_host("example.com"), Rule::Passthrough);
    }

    #[test]
    fn test_x_com_match_is_exact() {
        // Substring look-alikes do not get the mirror rewrite
        assert_eq!(Rule::for_host("www.x.com"), Rule::Passthrough);
        assert_eq!(Rule::for_host("notx.com"), Rule::Passthrough);
    }

    #[test]
    fn test_every_host_matches_some_rule() {
        for host in ["", "localhost", "127.0.0.1", "some.very.deep.example.org"] {
            // Passthrough closes the table, so dispatch never fails
            let _ = Rule::for_host(host);
            assert!(Rule::Passthrough.matches(host));
        }
    }

    #[tokio::test]
    async fn test_x_com_rewritten_to_fixupx() {
        let engine = pure_engine();
        let clean = engine.clean("https://x.com/a/b?c=1").await.unwrap();
        assert_eq!(clean, "https://fixupx.com/a/b?c=1");
    }

    #[tokio::test]
    async fn test_x_com_keeps_fragment() {
        let engine = pure_engine();
        let clean = engine
            .clean("https://x.com/user/status/1?s=20#media")
            .await
            .unwrap();
        assert_eq!(clean, "https://fixupx.com/user/status/1?s=20#media");
    }

    #[tokio::test]
    async fn test_xiaohongshu_keeps_only_xsec_token() {
        let engine = pure_engine();
        let clean = engine
            .clean("https://www.xiaohongshu.com/explore/abc?xsec_token=abc&foo=1&bar=2")
            .await
            .unwrap();
        assert_eq!(
            clean,
            "https://www.xiaohongshu.com/explore/abc?xsec_token=abc&xsec_source=pc_user"
        );
    }

    #[tokio::test]
    async fn test_xiaohongshu_token_order_preserved_regardless_of_input_order() {
        let engine = pure_engine();
        let clean = engine
            .clean("https://www.xiaohongshu.com/explore/abc?foo=1&xsec_token=tok")
            .await
            .unwrap();
        assert_eq!(
            clean,
            "https://www.xiaohongshu.com/explore/abc?xsec_token=tok&xsec_source=pc_user"
        );
    }

    #[tokio::test]
    async fn test_xiaohongshu_without_token_still_gets_source() {
        let engine = pure_engine();
        let clean = engine
            .clean("https://xhslink.com/something?share_id=42")
            .await
            .unwrap();
        assert_eq!(clean, "https://xhslink.com/something?xsec_source=pc_user");
    }

    #[tokio::test]
    async fn test_weixin_truncated_at_chksm() {
        let engine = pure_engine();
        let clean = engine
            .clean("https://mp.weixin.qq.com/s?x=1&chksm=deadbeef&y=2")
            .await
            .unwrap();
        assert_eq!(clean, "https://mp.weixin.qq.com/s?x=1");
    }

    #[tokio::test]
    async fn test_weixin_without_chksm_unchanged() {
        let engine = pure_engine();
        let url = "https://mp.weixin.qq.com/s?x=1&y=2";
        let clean = engine.clean(url).await.unwrap();
        assert_eq!(clean, url);
    }

    #[tokio::test]
    async fn test_netease_music_truncated_at_first_ampersand() {
        let engine = pure_engine();
        let clean = engine
            .clean("https://music.163.com/song?id=1&userid=999")
            .await
            .unwrap();
        assert_eq!(clean, "https://music.163.com/song?id=1");
    }

    #[tokio::test]
    async fn test_netease_music_without_ampersand_unchanged() {
        let engine = pure_engine();
        let url = "https://music.163.com/song?id=1";
        let clean = engine.clean(url).await.unwrap();
        assert_eq!(clean, url);
    }

    #[tokio::test]
    async fn test_netease_short_link_resolves_then_truncates() {
        let engine = engine_with("https://music.163.com/song?id=7&userid=999&from=share");
        let clean = engine.clean("http://163cn.tv/AbCdEf").await.unwrap();
        assert_eq!(clean, "https://music.163.com/song?id=7");
    }

    #[tokio::test]
    async fn test_netease_short_link_resolved_without_ampersand_unchanged() {
        let engine = engine_with("https://music.163.com/song?id=7");
        let clean = engine.clean("http://163cn.tv/AbCdEf").await.unwrap();
        assert_eq!(clean, "https://music.163.com/song?id=7");
    }

    #[tokio::test]
    async fn test_default_strips_query() {
        let engine = pure_engine();
        let clean = engine
            .clean("https://example.com/page?ref=track")
            .await
            .unwrap();
        assert_eq!(clean, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_default_keeps_fragment() {
        let engine = pure_engine();
        let clean = engine
            .clean("https://example.com/docs?utm_source=share#section-2")
            .await
            .unwrap();
        assert_eq!(clean, "https://example.com/docs#section-2");
    }

    #[tokio::test]
    async fn test_default_rule_is_idempotent() {
        let engine = pure_engine();
        let once = engine
            .clean("https://example.com/page?ref=track")
            .await
            .unwrap();
        let twice = engine.clean(&once).await.unwrap();
        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_unparseable_url_passed_through() {
        let engine = pure_engine();
        let clean = engine.clean("https://").await.unwrap();
        assert_eq!(clean, "https://");
    }
}
