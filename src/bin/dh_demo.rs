use dh_exchange::{run_exchange, ExchangeConfig};

fn main() {
    println!("Diffie-Hellman Key Exchange Algorithm");
    println!("------- Declaring the inputs -------");

    let config = ExchangeConfig::default();
    let transcript = match run_exchange(&config) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("exchange failed: {}", e);
            return;
        }
    };

    println!("The prime number is: {}", transcript.params.p);
    println!("The primitive root is: {}", transcript.params.g);
    println!("The private key for A is: {}", transcript.private_key_a);
    println!("The private key for B is: {}", transcript.private_key_b);

    println!("------- Running the algorithm -------");
    println!("---- Calculating the public keys ----");
    println!("The public key for A is: {}", transcript.public_key_a);
    println!("The public key for B is: {}", transcript.public_key_b);

    println!("- Calculating the shared secret key -");
    println!("The shared secret key for A is: {}", transcript.shared_secret_a);
    println!("The shared secret key for B is: {}", transcript.shared_secret_b);
}
