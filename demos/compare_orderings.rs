///Orders a grid or random pattern with every strategy
///and reports the fill-in each one produces.

use sparse_ordering_rust::gallery::{laplace2d,random_symmetric};
use sparse_ordering_rust::ordering::{OrderingMethod,PermutationStrategy,KHopDegree};
use sparse_ordering_rust::utility::fill_in;
use std::time::Instant;

fn main(){
    env_logger::init();
    use std::env;
    let args: Vec<String> = env::args().collect();
    if args.len()<3{
        eprintln!("usage: compare_orderings (grid|random) extent");
        std::process::exit(1);
    }
    let kind=args[1].clone();
    let n = match args[2].parse::<usize>(){
        Ok(n) if n>0 => n,
        _ => {
            eprintln!("extent must be a positive integer");
            std::process::exit(1);
        }
    };

    let mat = if kind=="grid" { laplace2d::<f64>(n,n) } else { random_symmetric::<f64>(n,4.0/(n as f64).max(4.0),42) };
    let natural : Vec<usize> = (0..mat.get_nrows()).collect();
    println!("{} variables, {} nonzeros",mat.get_nrows(),mat.nnz());
    match fill_in(&mat,&natural){
        Ok(f) => println!("{:>24} fill-in {:>8}","natural",f),
        Err(e) => eprintln!("natural: {}",e)
    }

    let methods = vec![OrderingMethod::ExactMinimumDegree,
                       OrderingMethod::GreedyMinimumFillin,
                       OrderingMethod::ApproximateFillin,
                       OrderingMethod::GreedyRow,
                       OrderingMethod::KHopDegree(KHopDegree::default())];
    for method in methods{
        let t = Instant::now();
        let result = method.get_permutation(&mat).and_then(|p| fill_in(&mat,&p));
        let secs = t.elapsed().as_secs_f64();
        match result{
            Ok(f) => println!("{:>24} fill-in {:>8}  ({:.3}s)",method.name(),f,secs),
            Err(e) => eprintln!("{}: {}",method.name(),e)
        }
    }
}
