use serde::{Deserialize, Serialize};

/// A tag describing a numeric property of a classified number
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Odd,
    Even,
}

/// Numeric properties of a single number, before the fun fact is attached
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
}

/// Complete payload returned for a successful classification
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClassificationResult {
    #[serde(flatten)]
    pub classification: Classification,
    pub fun_fact: serde_json::Value,
}

impl Classification {
    /// Attach the trivia provider's response, passed through untouched
    pub fn with_fun_fact(self, fun_fact: serde_json::Value) -> ClassificationResult {
        ClassificationResult {
            classification: self,
            fun_fact,
        }
    }
}

/// Compute every numeric property of `num`
pub fn classify(num: i64) -> Classification {
    Classification {
        number: num,
        is_prime: is_prime(num),
        is_perfect: is_perfect(num),
        properties: properties(num),
        digit_sum: digit_sum(num),
    }
}

/// Trial division by odd candidates up to `floor(sqrt(num))`
///
/// Everything at or below 1, negatives included, is not prime.
pub fn is_prime(num: i64) -> bool {
    if num <= 1 {
        return false;
    }
    if num == 2 {
        return true;
    }
    if num % 2 == 0 {
        return false;
    }

    let mut i = 3;
    // `i <= num / i` is `i * i <= num` without the overflow near i64::MAX
    while i <= num / i {
        if num % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// True when the proper positive divisors of `num` add up to `num`
///
/// Only positive numbers can be perfect, so 0 and negatives are always false.
/// Divisors are collected in pairs `(i, num / i)` up to the square root; the
/// total matches summing every divisor in `[1, num - 1]`.
pub fn is_perfect(num: i64) -> bool {
    if num <= 0 {
        return false;
    }

    let mut sum: u128 = 0;
    let mut i = 1;
    while i <= num / i {
        if num % i == 0 {
            let pair = num / i;
            if i != num {
                sum += i as u128;
            }
            if pair != i && pair != num {
                sum += pair as u128;
            }
        }
        i += 1;
    }

    sum == num as u128
}

/// Decimal digits of `|num|`, most significant first
fn digits(num: i64) -> Vec<u32> {
    num.unsigned_abs()
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

/// True when `num` equals the sum of its digits each raised to the digit count
///
/// Only numbers with two or more digits qualify: a single digit `d` is
/// trivially `d^1` and is not tagged. The sign is not a digit, so negative
/// numbers are never Armstrong numbers.
pub fn is_armstrong(num: i64) -> bool {
    if num < 10 {
        return false;
    }

    let digits = digits(num);
    let power = digits.len() as u32;
    let sum: u128 = digits.iter().map(|&d| (d as u128).pow(power)).sum();

    sum == num as u128
}

/// Property tags in fixed order: `armstrong` (when it holds) then the parity tag
pub fn properties(num: i64) -> Vec<Property> {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong(num) {
        properties.push(Property::Armstrong);
    }
    if num % 2 != 0 {
        properties.push(Property::Odd);
    } else {
        properties.push(Property::Even);
    }
    properties
}

/// Sum of the decimal digits of `num`, ignoring the sign
pub fn digit_sum(num: i64) -> u64 {
    digits(num).into_iter().map(u64::from).sum()
}
