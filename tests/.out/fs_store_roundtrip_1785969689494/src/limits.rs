mod limits;
const LIMIT: usize = 64;
