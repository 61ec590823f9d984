use crate::*;

/// A deterministic, index-addressable sequence of ElementModQ nonces derived from a seed.
///
/// With headers, the internal seed is `H(seed; headers...)`. Nonce `i` is `H(internal_seed; i)`
/// reduced mod Q. The same seed and headers always give the same sequence.
#[derive(Clone)]
pub struct Nonces {
    internal_seed: ElementModQ,
}

impl Nonces {
    pub fn new(seed: &ElementModQ, headers: &[&dyn HashElement]) -> Self {
        let internal_seed = if headers.is_empty() {
            seed.clone()
        } else {
            hash_function(&seed.to_bytes(), headers).to_element_mod_q(seed.group())
        };
        Nonces { internal_seed }
    }

    pub fn get(&self, index: u32) -> ElementModQ {
        self.get_with_headers(index, &[])
    }

    /// Nonce `index`, further separated by extra headers.
    pub fn get_with_headers(&self, index: u32, headers: &[&dyn HashElement]) -> ElementModQ {
        let mut state = HashState::new(&self.internal_seed.to_bytes());
        state.update(&index);
        for header in headers {
            state.update(*header);
        }
        state.finish().to_element_mod_q(self.internal_seed.group())
    }

    /// Lazy, unbounded iterator starting at index 0.
    pub fn iter(&self) -> NonceIter<'_> {
        NonceIter {
            nonces: self,
            index: 0,
        }
    }

    /// The first `count` nonces.
    pub fn take(&self, count: usize) -> Vec<ElementModQ> {
        self.iter().take(count).collect()
    }
}

pub struct NonceIter<'a> {
    nonces: &'a Nonces,
    index: u32,
}

impl<'a> Iterator for NonceIter<'a> {
    type Item = ElementModQ;

    fn next(&mut self) -> Option<ElementModQ> {
        let nonce = self.nonces.get(self.index);
        self.index = self.index.checked_add(1)?;
        Some(nonce)
    }
}
