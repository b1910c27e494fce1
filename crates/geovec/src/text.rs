//! Text form of vectors: `Display`, `FromStr` and the prompting reader.
//!
//! The text form is `(x, y)` / `(x, y, z)` with each component printed by the
//! scalar's own `Display`. Parsing accepts that form back; the parentheses
//! are optional and whitespace around components is ignored.

use crate::{ParseVectorError, Scalar, Vec2, Vec3};
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

fn parse_components<S: Scalar, const N: usize>(s: &str) -> Result<[S; N], ParseVectorError> {
    let s = s.trim();
    let body = match (s.strip_prefix('('), s.ends_with(')')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => s,
        _ => return Err(ParseVectorError::UnbalancedParen),
    };

    let mut out = [S::ZERO; N];
    let mut parts = body.split(',');
    for (index, slot) in out.iter_mut().enumerate() {
        let text = parts
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ParseVectorError::MissingComponent { index })?;
        *slot = text
            .parse()
            .map_err(|_| ParseVectorError::InvalidComponent { index, text: text.to_string() })?;
    }
    if parts.next().is_some() {
        return Err(ParseVectorError::TrailingInput);
    }
    Ok(out)
}

impl<S: Scalar> fmt::Display for Vec2<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<S: Scalar> fmt::Display for Vec3<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<S: Scalar> FromStr for Vec2<S> {
    type Err = ParseVectorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<S, 2>(s).map(Self::from)
    }
}

impl<S: Scalar> FromStr for Vec3<S> {
    type Err = ParseVectorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<S, 3>(s).map(Self::from)
    }
}

#[cfg(feature = "std")]
mod prompt {
    use crate::{ParseVectorError, Scalar, Vec2, Vec3};
    use std::io::{self, BufRead, Write};
    use std::string::String;
    use std::vec::Vec;
    use tracing::{debug, warn};

    const NAMES: [&str; 3] = ["x", "y", "z"];

    /// Next whitespace-delimited token, leaving the delimiter unread.
    fn next_token<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Option<String>> {
        let mut token = Vec::new();
        loop {
            let buf = input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut done = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if token.is_empty() {
                        used += 1;
                        continue;
                    }
                    done = true;
                    break;
                }
                token.push(b);
                used += 1;
            }
            input.consume(used);
            if done {
                break;
            }
        }
        if token.is_empty() {
            return Ok(None);
        }
        String::from_utf8(token)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Prompt for and read each component in order, writing straight into
    /// `out`. Components read before a failure keep their new values.
    fn read_components<S: Scalar, R, W>(
        out: &mut [S],
        input: &mut R,
        prompt: &mut W,
    ) -> Result<(), ParseVectorError>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        for (index, slot) in out.iter_mut().enumerate() {
            let name = NAMES[index];
            write!(prompt, "{name} = ")?;
            prompt.flush()?;
            let text = next_token(input)?.ok_or(ParseVectorError::UnexpectedEof { index })?;
            match text.parse() {
                Ok(value) => {
                    debug!(component = name, %value, "read vector component");
                    *slot = value;
                }
                Err(_) => {
                    warn!(component = name, text = %text, "vector component did not parse");
                    return Err(ParseVectorError::InvalidComponent { index, text });
                }
            }
        }
        Ok(())
    }

    macro_rules! impl_prompt_read {
        ($V:ident) => {
            impl<S: Scalar> $V<S> {
                /// Prompts on `prompt` with `x = `, `y = `, ... and reads one
                /// whitespace-delimited value per component from `input`.
                ///
                /// No recovery: on error, components read so far stay updated.
                pub fn read_from<R, W>(&mut self, input: &mut R, prompt: &mut W) -> Result<(), ParseVectorError>
                where
                    R: BufRead + ?Sized,
                    W: Write + ?Sized,
                {
                    read_components(self.as_mut_array(), input, prompt)
                }

                /// [`read_from`](Self::read_from) on locked stdin and stdout.
                pub fn read_stdin(&mut self) -> Result<(), ParseVectorError> {
                    let stdin = io::stdin();
                    let stdout = io::stdout();
                    self.read_from(&mut stdin.lock(), &mut stdout.lock())
                }
            }
        };
    }

    impl_prompt_read!(Vec2);
    impl_prompt_read!(Vec3);

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn tokens_span_lines() {
            let mut input = io::Cursor::new("  1.5\n\t-2  \n3");
            assert_eq!(next_token(&mut input).unwrap().as_deref(), Some("1.5"));
            assert_eq!(next_token(&mut input).unwrap().as_deref(), Some("-2"));
            assert_eq!(next_token(&mut input).unwrap().as_deref(), Some("3"));
            assert_eq!(next_token(&mut input).unwrap(), None);
        }

        #[test]
        fn read_prompts_each_component() {
            let mut input = io::Cursor::new("1 2\n3\n");
            let mut prompt = Vec::<u8>::new();
            let mut v = Vec3::<f64>::zero();
            v.read_from(&mut input, &mut prompt).unwrap();
            assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
            assert_eq!(String::from_utf8(prompt).unwrap(), "x = y = z = ");
        }

        #[test]
        fn failed_read_leaves_partial_update() {
            let mut input = io::Cursor::new("7 oops 9");
            let mut prompt = Vec::<u8>::new();
            let mut v = Vec3::new(0.0f32, 0.0, 0.0);
            let err = v.read_from(&mut input, &mut prompt).unwrap_err();
            assert!(matches!(err, ParseVectorError::InvalidComponent { index: 1, .. }));
            assert_eq!(v, Vec3::new(7.0, 0.0, 0.0));
        }

        #[test]
        fn eof_is_reported() {
            let mut input = io::Cursor::new("4");
            let mut v = Vec2::<f64>::zero();
            let err = v.read_from(&mut input, &mut io::sink()).unwrap_err();
            assert!(matches!(err, ParseVectorError::UnexpectedEof { index: 1 }));
            assert_eq!(v.x, 4.0);
        }
    }
}
