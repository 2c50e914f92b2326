///Reads a TOML strategy config and prints the ordering of a small grid.

use sparse_ordering_rust::config::OrderingConfig;
use sparse_ordering_rust::gallery::laplace2d;
use sparse_ordering_rust::ordering::PermutationStrategy;
use sparse_ordering_rust::utility::{fill_in,inverse_permutation};

fn main(){
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1){
        Some(file) => OrderingConfig::load(file),
        None => Ok(OrderingConfig::default())
    };
    let method = match config.and_then(|c| c.build()){
        Ok(m) => m,
        Err(e) => {
            eprintln!("bad config: {}",e);
            std::process::exit(1);
        }
    };

    let mat = laplace2d::<f64>(6,6);
    match method.get_permutation(&mat){
        Ok(p) => {
            println!("{}: {:?}",method.name(),p);
            println!("inverse: {:?}",inverse_permutation(&p));
            if let Ok(f) = fill_in(&mat,&p){
                println!("fill-in: {}",f);
            }
        },
        Err(e) => eprintln!("{}: {}",method.name(),e)
    }
}
