//! robots.txt crawl-delay discovery.
//!
//! Only the `Crawl-delay` directive is looked at: allow/disallow rules are not enforced.

/// A group of records applying to a set of user agents.
#[derive(Debug, Default)]
struct Group {
    agents: Vec<String>,
    crawl_delay: Option<f64>,
}

/// Split a robots.txt body into groups.
fn groups(body: &str) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut current = Group::default();
    // true when the current group already has rules, meaning that a new user-agent line starts a new group.
    let mut has_rules = false;

    for line in body.lines() {
        let line = match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        }
        .trim();

        if line.is_empty() {
            // blank lines end groups
            if !current.agents.is_empty() {
                groups.push(std::mem::take(&mut current));
                has_rules = false;
            }
            continue;
        }

        let (key, value) = match line.split_once(':') {
            Some((key, value)) => (key.trim().to_lowercase(), value.trim()),
            None => continue,
        };

        match key.as_str() {
            "user-agent" => {
                if has_rules {
                    groups.push(std::mem::take(&mut current));
                    has_rules = false;
                }
                current.agents.push(value.to_lowercase());
            }
            "crawl-delay" => {
                has_rules = true;
                if current.crawl_delay.is_none() {
                    current.crawl_delay = value
                        .parse::<f64>()
                        .ok()
                        .filter(|d| d.is_finite() && *d >= 0.0);
                }
            }
            _ => has_rules = true,
        }
    }

    if !current.agents.is_empty() {
        groups.push(current);
    }

    groups
}

/// Get the crawl delay (in seconds) that applies to `user_agent`.
///
/// A group naming the agent is preferred over the `*` group.
/// The agent is matched on its product token (`gleaner` for `gleaner/0.1.0`), case-insensitively.
pub fn crawl_delay(body: &str, user_agent: &str) -> Option<f64> {
    let token = user_agent
        .split('/')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    let groups = groups(body);

    let specific = groups.iter().find(|group| {
        group
            .agents
            .iter()
            .any(|agent| agent != "*" && !agent.is_empty() && token.contains(agent.as_str()))
    });

    match specific {
        Some(group) => group.crawl_delay,
        None => groups
            .iter()
            .find(|group| group.agents.iter().any(|agent| agent == "*"))
            .and_then(|group| group.crawl_delay),
    }
}
