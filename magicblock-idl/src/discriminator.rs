use solana_sdk::hash::hashv;

pub const DISCRIMINATOR_LEN: usize = 8;

pub type Discriminator = [u8; DISCRIMINATOR_LEN];

const GLOBAL_NAMESPACE: &str = "global";
const EVENT_NAMESPACE: &str = "event";

/// First 8 bytes of `sha256("<namespace>:<name>")`.
pub fn sighash(namespace: &str, name: &str) -> Discriminator {
    let preimage = format!("{namespace}:{name}");
    let hash = hashv(&[preimage.as_bytes()]);
    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&hash.to_bytes()[..DISCRIMINATOR_LEN]);
    discriminator
}

/// Instruction names are camelCase in the IDL but the program hashes the
/// snake_case handler name.
pub fn instruction_discriminator(ix_name: &str) -> Discriminator {
    sighash(GLOBAL_NAMESPACE, &to_snake_case(ix_name))
}

pub fn event_discriminator(event_name: &str) -> Discriminator {
    sighash(EVENT_NAMESPACE, event_name)
}

pub(crate) fn to_snake_case(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower_or_digit {
                snake.push('_');
            }
            snake.push(c.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else {
            prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
            snake.push(c);
        }
    }
    snake
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("initialize", "initialize" ; "single word")]
    #[test_case("createMarket", "create_market" ; "camel case")]
    #[test_case("setV2Authority", "set_v2_authority" ; "digits")]
    #[test_case("already_snake", "already_snake" ; "snake case")]
    fn test_to_snake_case(input: &str, expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[test]
    fn test_instruction_discriminator_uses_snake_case() {
        assert_eq!(
            instruction_discriminator("createMarket"),
            sighash("global", "create_market")
        );
    }

    #[test]
    fn test_known_initialize_discriminator() {
        // sha256("global:initialize")[..8]
        assert_eq!(
            instruction_discriminator("initialize"),
            [175, 175, 109, 31, 13, 152, 155, 237]
        );
    }

    #[test]
    fn test_event_and_instruction_namespaces_differ() {
        assert_ne!(event_discriminator("Deposit"), sighash("global", "Deposit"));
    }
}
