fn greeting(name: &str) -> String {
    format!("hello, {}", name)
}

fn main() {
    println!("{}", greeting("world"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets() {
        assert_eq!(greeting("a"), "hello, a");
    }
}
