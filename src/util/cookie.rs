//! `document.cookie` string helpers.
//!
//! The browser exposes cookies as one `a=1; b=2` string for reads and takes
//! one `name=value; path=/` directive per write. These helpers keep both
//! shapes in one place so the in-memory jar and the browser jar agree.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// First non-empty value stored under `name`, if any.
pub fn find<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }
    header.split(';').find_map(|pair| {
        let rest = pair.trim_start().strip_prefix(name)?;
        let value = rest.trim_start().strip_prefix('=')?.trim_start();
        (!value.is_empty()).then_some(value)
    })
}

/// Write directive for `name=value` scoped to `path`. No expiry: session lifetime.
pub fn directive(name: &str, value: &str, path: &str) -> String {
    format!("{name}={value}; path={path}")
}

/// Apply a write to a cookie header the way the browser would for one path.
pub fn upsert(header: &str, name: &str, value: &str) -> String {
    let mut replaced = false;
    let mut pairs: Vec<String> = header
        .split(';')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let key = pair.split_once('=').map_or(pair, |(key, _)| key).trim_end();
            if !replaced && key == name {
                replaced = true;
                format!("{name}={value}")
            } else {
                pair.to_owned()
            }
        })
        .collect();
    if !replaced {
        pairs.push(format!("{name}={value}"));
    }
    pairs.join("; ")
}
