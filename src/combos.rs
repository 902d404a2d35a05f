/// Lexicographic k-subset enumerator over indices 0..n.
///
/// The cursor buffer is caller-owned scratch, so nested enumerations in
/// hot loops allocate nothing per step. Each yield is a strictly
/// increasing index slice; the advance bumps the rightmost position
/// that still has room and resets the suffix behind it.
pub struct Subsets<'a> {
    cursor: &'a mut [usize],
    n: usize,
    state: State,
}

enum State {
    Fresh,
    Running,
    Done,
}

impl<'a> Subsets<'a> {
    /// k is the cursor length. k > n yields nothing; k == 0 yields one
    /// empty subset.
    pub fn new(cursor: &'a mut [usize], n: usize) -> Self {
        Self {
            cursor,
            n,
            state: State::Fresh,
        }
    }

    pub fn next(&mut self) -> Option<&[usize]> {
        match self.state {
            State::Done => None,
            State::Fresh => {
                if self.cursor.len() > self.n {
                    self.state = State::Done;
                    return None;
                }
                for (i, c) in self.cursor.iter_mut().enumerate() {
                    *c = i;
                }
                self.state = State::Running;
                Some(self.cursor)
            }
            State::Running => {
                let k = self.cursor.len();
                let mut i = k;
                loop {
                    if i == 0 {
                        self.state = State::Done;
                        return None;
                    }
                    i -= 1;
                    self.cursor[i] += 1;
                    if self.cursor[i] < self.n - (k - i - 1) {
                        for j in i + 1..k {
                            self.cursor[j] = self.cursor[j - 1] + 1;
                        }
                        return Some(self.cursor);
                    }
                }
            }
        }
    }

    /// C(n, k), multiplying before dividing so every intermediate stays
    /// an exact binomial.
    pub fn count(n: usize, k: usize) -> usize {
        match k > n {
            true => 0,
            false => (0..k).fold(1, |c, i| c * (n - i) / (i + 1)),
        }
    }
}
