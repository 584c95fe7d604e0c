use packed_bools::{PackedBools, PackedBoolsError};

fn main() -> Result<(), PackedBoolsError> {
    println!("=== Packed Bools Examples ===\n");

    example_sieve()?;
    example_density();

    Ok(())
}

fn example_sieve() -> Result<(), PackedBoolsError> {
    println!("Example 1: Sieve of Eratosthenes on packed bits");

    let limit = 64;
    let mut is_prime = PackedBools::with_len(limit, true)?;
    is_prime.set(0, false)?;
    is_prime.set(1, false)?;

    for n in 2..limit {
        if is_prime.get(n)? {
            let mut multiple = n * n;
            while multiple < limit {
                is_prime.set(multiple, false)?;
                multiple += n;
            }
        }
    }

    let primes: Vec<usize> = is_prime
        .iter()
        .enumerate()
        .filter_map(|(n, prime)| prime.then_some(n))
        .collect();
    println!("  Primes below {}: {:?}", limit, primes);
    println!("  Stored in {} bytes", is_prime.as_bytes().len());
    println!();

    Ok(())
}

fn example_density() {
    println!("Example 2: Density versus byte-per-bool storage");

    let count = 1024;
    let mut packed = PackedBools::new();
    for i in 0..count {
        packed.push(i % 2 == 0).unwrap();
    }

    println!("  {} flags as Vec<bool>: {} bytes", count, count);
    println!("  {} flags packed:       {} bytes", count, packed.as_bytes().len());
}
