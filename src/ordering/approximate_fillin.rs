use crate::error::{require_square,Result};
use crate::ordering::{PermutationStrategy,PatternCounts};
use crate::sparse::SparseView;

///Cheap fill-in estimate that never simulates elimination.
///
///Each column carries the number of zeros it had in the original
///matrix. A candidate's estimate is the sum of those counts over the
///columns where its row is nonzero; the smallest estimate goes next
///and the counts of the columns it touched are halved.
///
///Experimental. The estimate can be far from the true fill-in; it is
///only worth using when N is too large for the exact strategies.
#[derive(Clone,Copy,Debug,Default,PartialEq)]
pub struct ApproximateFillin;

impl PermutationStrategy for ApproximateFillin{
    fn get_permutation<M : SparseView>(&self,mat : &M) -> Result<Vec<usize>>{
        require_square(mat.get_nrows(),mat.get_ncols())?;
        let mut counts = PatternCounts::new(mat);
        let n=mat.get_nrows();
        log::debug!("approximate fill-in: ordering {} nodes",n);
        let mut perm = Vec::<usize>::with_capacity(n);
        while let Some((k,estimate)) = counts.cheapest_unused(){
            log::trace!("approximate fill-in: take {} (estimate {})",k,estimate);
            counts.take(k,|z| z/2);
            perm.push(k);
        }
        log::debug!("approximate fill-in: done");
        Ok(perm)
    }
}

#[cfg(test)]
mod tests {
    use crate::ordering::{PermutationStrategy,ApproximateFillin};
    use crate::gallery::{laplace2d,star,complete};
    use crate::sparse::{CSCSparse,DenseMatrix};
    use crate::utility::{fill_in,is_permutation};
    use crate::error::OrderingError;

    #[test]
    fn approx_is_permutation(){
        let a = laplace2d::<f64>(9,7);
        let p = ApproximateFillin.get_permutation(&a).unwrap();
        assert!(is_permutation(&p,63));
    }

    #[test]
    fn approx_star_leaves_before_centre(){
        //Leaves touch the full centre column plus their own;
        //the centre touches every column, so it comes out last
        let a = star::<f64>(6);
        let p = ApproximateFillin.get_permutation(&a).unwrap();
        assert_eq!(p[0],1);
        assert_eq!(*p.last().unwrap(),0);
        assert_eq!(fill_in(&a,&p).unwrap(),0);
    }

    #[test]
    fn approx_halves_touched_counts(){
        //  x x .
        //  . x x
        //  . x x
        let a = CSCSparse::from_triplets(3,3,&[(0,0,1.0),(0,1,1.0),(1,1,1.0),(1,2,1.0),(2,1,1.0),(2,2,1.0)]);
        //zero counts [2,0,1], estimates row0=2 row1=1 row2=1: row 1 goes first.
        //Halving cols 1,2 gives [2,0,0], so row 2 (estimate 0) beats row 0.
        let p = ApproximateFillin.get_permutation(&a).unwrap();
        assert_eq!(p,vec![1,2,0]);
    }

    #[test]
    fn approx_dense_is_identity(){
        //Every estimate is zero, so the first minimum is always the lowest index
        let a = complete::<f64>(4);
        let p = ApproximateFillin.get_permutation(&a).unwrap();
        assert_eq!(p,vec![0,1,2,3]);
    }

    #[test]
    fn approx_non_square_fails(){
        let d = DenseMatrix::<f64>::zeros(4,3);
        match ApproximateFillin.get_permutation(&d){
            Err(OrderingError::InvalidArgument{..}) => {},
            other => panic!("expected InvalidArgument, got {:?}",other)
        }
    }
}
