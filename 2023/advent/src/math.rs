pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}

pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        0
    } else {
        a / gcd(a, b) * b
    }
}

/// Least common multiple of every value, 1 for an empty input.
pub fn lcm_all<I: IntoIterator<Item = u64>>(values: I) -> u64 {
    values.into_iter().fold(1, lcm)
}
