// Bindings are generated by build.rs from the JSON ABIs in abis/.
pub mod uniswap_v2_pair;
pub mod uniswap_v2_router;
