use ethers::prelude::Abigen;

fn main() {
    println!("cargo:rerun-if-changed=abis");

    Abigen::new("UniswapV2Router", "./abis/UniswapV2Router.json")
        .unwrap()
        .generate()
        .unwrap()
        .write_to_file("./src/contracts/uniswap_v2_router.rs")
        .unwrap();

    Abigen::new("UniswapV2Pair", "./abis/UniswapV2Pair.json")
        .unwrap()
        .generate()
        .unwrap()
        .write_to_file("./src/contracts/uniswap_v2_pair.rs")
        .unwrap();
}
