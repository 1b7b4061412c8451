use rand::Rng;

/// Fixed money-and-loan joke list for the Joke Break view.
///
/// Immutable by design: selection always draws from this list and nothing is
/// ever persisted beyond the currently displayed index.
pub const JOKES: [&str; 7] = [
    "Why did the banker switch careers? He lost interest.",
    "I applied for a loan to start a bakery. Now I'm rolling in dough!",
    "Why don't banks trust atoms? They make up everything!",
    "I bought a house with a 100-year mortgage. My grandkids will love it!",
    "Why did the credit card go to therapy? It couldn't deal with the charges.",
    "My wallet is like an onion. Opening it makes me cry.",
    "I told my loan officer I'm broke. He said, 'Join the club!'",
];

/// Picks one joke uniformly at random. Returns the index alongside the text
/// so the caller can report which entry was shown.
pub fn random_joke<R: Rng + ?Sized>(rng: &mut R) -> (usize, &'static str) {
    let index = rng.random_range(0..JOKES.len());
    (index, JOKES[index])
}
