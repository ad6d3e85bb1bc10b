// Validation
pub const ERR_EMPTY_ARRAY: &str = "EmptyArray";
pub const ERR_INCORRECT_VALUE: &str = "IncorrectValue";
pub const ERR_UNKNOWN_CITY: &str = "UnknownCity";

// Authorization
pub const ERR_WRONG_MAYOR: &str = "WrongMayor";
pub const ERR_NOT_WINNER: &str = "NotWinner";

// State / period
pub const ERR_INCORRECT_PERIOD: &str = "IncorrectPeriod";
pub const ERR_INACTIVE_OBJECT: &str = "InactiveObject";

// Capacity
pub const ERR_VOTES_BANK_EXCEEDED: &str = "VotesBankExceeded";

// Economic
pub const ERR_INSUFFICIENT_BALANCE: &str = "InsufficientBalance";

// Idempotency
pub const ERR_ALREADY_CLAIMED: &str = "AlreadyClaimed";
pub const ERR_BUILDING_DUPLICATE: &str = "BuildingDuplicate";
