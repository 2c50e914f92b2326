use num_traits::Num;
use num_traits::cast::NumCast;
use rand::{Rng,SeedableRng};
use rand::rngs::StdRng;

use crate::sparse::CSCSparse;


fn constant<F : Num+NumCast>(x : f64) -> F{
    F::from(x).unwrap()
}

pub fn eye<F : Num+NumCast+Copy>(m : usize) -> CSCSparse<F> {
    let offsets : Vec<usize> = (0..m+1).collect();
    let rids : Vec<usize> = (0..m).collect();
    let vals : Vec<F> = (0..m).map(|_|F::one()).collect();
    CSCSparse::<F>::new(m,m,offsets,rids,vals)
}

pub fn laplace1d<F : Num+NumCast+Copy>(m : usize) -> CSCSparse<F> {
    let mut offsets = Vec::<usize>::new();
    let mut rids = Vec::<usize>::new();
    let mut vals = Vec::<F>::new();
    offsets.push(0);
    for i in 0..m{
        if i>0{
            rids.push(i-1);
            vals.push(constant(-1.0));
        }
        if i+1<m{
            rids.push(i+1);
            vals.push(constant(-1.0));
        }
        rids.push(i);
        vals.push(constant(2.0));
        offsets.push(rids.len());
    }
    CSCSparse::<F>::new(m,m,offsets,rids,vals)
}

pub fn laplace2d<F : Num+NumCast+Copy>(mx : usize,my : usize) -> CSCSparse<F> {
    let nrows=mx*my;
    let ncols=mx*my;
    let mut offsets = Vec::<usize>::new();
    let mut rids = Vec::<usize>::new();
    let mut vals = Vec::<F>::new();
    offsets.push(0);
    let id = |ix : usize,iy : usize|{iy + my*ix};
    for ix in 0..mx{
        for iy in 0..my{
            rids.push(id(ix,iy));
            vals.push(constant(4.0));
            if ix>0{
                rids.push(id(ix-1,iy));
                vals.push(constant(-1.0));
            }
            if ix+1<mx{
                rids.push(id(ix+1,iy));
                vals.push(constant(-1.0));
            }
            if iy>0{
                rids.push(id(ix,iy-1));
                vals.push(constant(-1.0));
            }
            if iy+1<my{
                rids.push(id(ix,iy+1));
                vals.push(constant(-1.0));
            }
            offsets.push(rids.len());
        }
    }
    CSCSparse::<F>::new(nrows,ncols,offsets,rids,vals)
}

///Symmetric pattern with a unit diagonal and a unit entry in
///both (i,j) and (j,i) for every listed edge.
pub fn from_edges<F : Num+NumCast+Copy>(m : usize,edges : &[(usize,usize)]) -> CSCSparse<F> {
    let mut triplets : Vec<(usize,usize,F)> = (0..m).map(|i|(i,i,F::one())).collect();
    for &(i,j) in edges.iter(){
        if i != j{
            triplets.push((i,j,F::one()));
            triplets.push((j,i,F::one()));
        }
    }
    CSCSparse::from_triplets(m,m,&triplets)
}

///0 - 1 - 2 - ... - (m-1)
pub fn path<F : Num+NumCast+Copy>(m : usize) -> CSCSparse<F> {
    let edges : Vec<(usize,usize)> = (1..m).map(|i|(i-1,i)).collect();
    from_edges(m,&edges)
}

///Node 0 joined to every other node.
pub fn star<F : Num+NumCast+Copy>(m : usize) -> CSCSparse<F> {
    let edges : Vec<(usize,usize)> = (1..m).map(|i|(0,i)).collect();
    from_edges(m,&edges)
}

///Fully dense pattern.
pub fn complete<F : Num+NumCast+Copy>(m : usize) -> CSCSparse<F> {
    let mut edges = Vec::<(usize,usize)>::new();
    for i in 0..m{
        for j in i+1..m{
            edges.push((i,j));
        }
    }
    from_edges(m,&edges)
}

///Random symmetric pattern where each off-diagonal pair is an edge
///with probability `density`. Same seed, same matrix.
pub fn random_symmetric<F : Num+NumCast+Copy>(m : usize,density : f64,seed : u64) -> CSCSparse<F> {
    assert!(density>=0.0 && density<=1.0);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::<(usize,usize)>::new();
    for i in 0..m{
        for j in i+1..m{
            if rng.gen_bool(density){
                edges.push((i,j));
            }
        }
    }
    from_edges(m,&edges)
}
