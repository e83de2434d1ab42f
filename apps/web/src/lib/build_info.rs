pub fn git_commit_hash() -> &'static str {
    match option_env!("PREFABRICA_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

/// Abbreviated commit hash for footers and version badges.
pub fn short_commit_hash() -> &'static str {
    let hash = git_commit_hash();
    hash.get(..7).unwrap_or(hash)
}

#[cfg(test)]
mod tests {
    use super::short_commit_hash;

    #[test]
    fn short_hash_is_at_most_seven_chars() {
        assert!(short_commit_hash().len() <= 7);
    }
}
