/*! Polite HTTP fetching.

[PoliteClient] is a blocking HTTP client that:
- waits between requests, using the `Crawl-delay` of the host's robots.txt when there is one,
- retries failed requests, waiting a bit longer after each failure,
- gives up after a number of attempts, returning [None].

robots.txt files are fetched once per host.
!*/
use std::cell::RefCell;
use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use log::{debug, warn};
use rand::Rng;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use url::Url;

use crate::config::FetchConfig;
use crate::error::Error;
use crate::robots;
use crate::sources::Fetch;

pub struct PoliteClient {
    client: Client,
    config: FetchConfig,
    /// Crawl delay (in seconds) per host origin.
    delays: RefCell<HashMap<String, f64>>,
}

/// Get the robots.txt URL of the host serving `url`, along with the host origin.
fn robots_url(url: &str) -> Result<(String, String), Error> {
    let parsed = Url::parse(url)?;
    let origin = parsed.origin().ascii_serialization();
    let robots = parsed.join("/robots.txt")?;
    Ok((origin, robots.to_string()))
}

/// Longest wait between two requests, in seconds.
const MAX_DELAY: f64 = 3600.0;

/// Build a duration from seconds, clamped to `[0, MAX_DELAY]`. NaN gives zero.
fn seconds(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs.clamp(0.0, MAX_DELAY)).unwrap_or(Duration::ZERO)
}

impl PoliteClient {
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            config,
            delays: RefCell::new(HashMap::new()),
        })
    }

    /// Get the delay to wait between requests to the host of `url`.
    fn delay(&self, url: &str) -> f64 {
        let (origin, robots) = match robots_url(url) {
            Ok(urls) => urls,
            Err(e) => {
                debug!("could not get robots.txt location of {}: {:?}", url, e);
                return self.config.default_delay;
            }
        };

        if let Some(delay) = self.delays.borrow().get(&origin) {
            return *delay;
        }

        let delay = self
            .get(&robots)
            .ok()
            .and_then(|body| robots::crawl_delay(&body, &self.config.user_agent))
            .unwrap_or(self.config.default_delay);
        debug!("using a delay of {}s for {}", delay, origin);

        self.delays.borrow_mut().insert(origin, delay);
        delay
    }

    /// Single GET request, failing on non-200 statuses.
    fn get(&self, url: &str) -> Result<String, Error> {
        let resp = self.client.get(url).send()?;
        match resp.status() {
            StatusCode::OK => Ok(resp.text()?),
            status => Err(Error::Custom(format!("{}: got status {}", url, status))),
        }
    }
}

impl Fetch for PoliteClient {
    fn fetch(&self, url: &str) -> Option<String> {
        let delay = self.delay(url);
        let mut rng = rand::thread_rng();

        for attempt in 1..=self.config.max_retries {
            match self.get(url) {
                Ok(body) => {
                    let jitter: f64 = rng.gen::<f64>() * self.config.jitter;
                    thread::sleep(seconds(delay + jitter));
                    return Some(body);
                }
                Err(e) => {
                    debug!("attempt {} on {} failed: {:?}", attempt, url, e);
                    thread::sleep(seconds(delay * attempt as f64));
                }
            }
        }

        warn!(
            "could not fetch {} after {} attempts",
            url, self.config.max_retries
        );
        None
    }
}
