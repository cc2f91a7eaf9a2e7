use crate::api::Expectation;
use crate::matcher::model::ParsedArguments;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
enum TokenClass<'t> {
    /// `--name`, carrying `name`.
    Long(&'t str),
    /// `-abc`, carrying `abc`.
    ShortCluster(&'t str),
    Object,
}

fn classify(token: &str) -> TokenClass<'_> {
    if token.len() < 2 || !token.starts_with('-') {
        TokenClass::Object
    } else if let Some(name) = token.strip_prefix("--") {
        TokenClass::Long(name)
    } else {
        TokenClass::ShortCluster(&token[1..])
    }
}

/// Walks the command line tokens once, matching flags against the expectations.
#[derive(Debug)]
pub(crate) struct TokenMatcher<'e> {
    expectations: &'e [Expectation],
    arguments: ParsedArguments,
}

impl<'e> TokenMatcher<'e> {
    pub(crate) fn new(expectations: &'e [Expectation], arguments: ParsedArguments) -> Self {
        Self {
            expectations,
            arguments,
        }
    }

    pub(crate) fn consume(mut self, tokens: &[&str]) -> ParsedArguments {
        let mut index = 0;

        while index < tokens.len() {
            let token = tokens[index];
            let following = &tokens[index + 1..];
            // 1. Find a 'long' flag, such as:
            //  --limit-end
            //  --limit-end ..
            // 2. Find 'short' flag(s), such as (both -e and -b are example short flags):
            //  -e
            //  -e ..
            //  -eb .. ..
            // 3. Anything else is a positional object.
            let consumed = match classify(token) {
                TokenClass::Long(name) => self.match_long(token, name, following),
                TokenClass::ShortCluster(cluster) => self.match_short_cluster(cluster, following),
                TokenClass::Object => {
                    self.arguments.push_object(token);
                    0
                }
            };

            index += 1 + consumed;
        }

        self.arguments
    }

    fn find(&self, token: &str) -> Option<&'e Expectation> {
        self.expectations.iter().find(|e| e.is_named(token))
    }

    fn match_long(&mut self, token: &str, name: &str, following: &[&str]) -> usize {
        let Some(expectation) = self.find(token) else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Ignoring unregistered flag '{token}'.");
            }

            return 0;
        };

        if expectation.value_type().is_switch() {
            self.arguments.switch_named(name);
            return 0;
        }

        match following.first() {
            Some(value) if expectation.value_type().accepts(value) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Captured '{value}' for '{token}'.");
                }

                self.arguments.capture_named(name, value.to_string());
                1
            }
            _ => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "No {} value for '{token}'.",
                        expectation.value_type()
                    );
                }

                self.arguments.reject(token, expectation.error());
                discard_mismatch(following, 0)
            }
        }
    }

    fn match_short_cluster(&mut self, cluster: &str, following: &[&str]) -> usize {
        // Each value-taking flag in the cluster claims the next unclaimed token.
        let mut offset = 0;
        let mut mismatch = None;

        for short in cluster.chars() {
            let token = format!("-{short}");
            let Some(expectation) = self.find(&token) else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Ignoring unregistered flag '{token}'.");
                }

                continue;
            };

            if expectation.value_type().is_switch() {
                self.arguments.switch_short(short);
                continue;
            }

            match following.get(offset) {
                Some(value) if expectation.value_type().accepts(value) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Captured '{value}' for '{token}'.");
                    }

                    self.arguments.capture_short(short, value.to_string());
                    offset += 1;
                }
                _ => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!(
                            "No {} value for '{token}'.",
                            expectation.value_type()
                        );
                    }

                    self.arguments.reject(&token, expectation.error());
                    mismatch = Some(offset);
                }
            }
        }

        if mismatch == Some(offset) {
            offset + discard_mismatch(following, offset)
        } else {
            offset
        }
    }
}

// A rejected value is dropped rather than becoming a positional object, unless it is itself a flag.
fn discard_mismatch(following: &[&str], offset: usize) -> usize {
    match following.get(offset) {
        Some(token) if classify(token) == TokenClass::Object => 1,
        _ => 0,
    }
}
