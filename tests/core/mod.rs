// tests/core/mod.rs

#[cfg(test)]
mod envelope;
#[cfg(test)]
mod file;
#[cfg(test)]
mod key;
